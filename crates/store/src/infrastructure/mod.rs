//! Infrastructure for the reference store.

pub mod memory;
