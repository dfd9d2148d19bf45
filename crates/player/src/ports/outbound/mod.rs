//! Outbound ports - boundaries the application calls out through

pub mod character_store_port;

pub use character_store_port::{CharacterStorePort, TransportError};

#[cfg(any(test, feature = "testing"))]
pub use character_store_port::MockCharacterStorePort;
