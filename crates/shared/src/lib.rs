//! Character Builder Shared - wire contract for the remote character store
//!
//! Types used by both the player (client) and the reference store (server).
//!
//! # Design Principles
//!
//! 1. **No business logic** - records and rosters come from the domain crate
//! 2. **WASM compatible** - must compile for both native and wasm32 targets

pub mod character_store;

pub use character_store::{
    character_path, FetchCharactersResponse, Owner, OwnerError, ServerAck, CHARACTER_RESOURCE,
    DEFAULT_OWNER,
};
