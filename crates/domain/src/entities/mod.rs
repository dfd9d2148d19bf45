//! Domain entities - Core business objects with identity

mod character;

pub use character::{CharacterData, CharacterRecord};
