//! Aggregates - consistency boundaries over entities

mod roster;

pub use roster::CharacterCollection;
