//! Character Store Port - Object-safe boundary to the remote roster store
//!
//! The roster is saved and fetched as a whole; there is no per-record
//! endpoint. Adapters own the URL, owner segment and wire envelope.

use thiserror::Error;

use charbuild_domain::CharacterCollection;
use charbuild_shared::ServerAck;

/// Failure talking to the character store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CharacterStorePort: Send + Sync {
    /// Replace the owner's stored roster with `roster`.
    async fn save_all(&self, roster: &CharacterCollection) -> Result<ServerAck, TransportError>;

    /// The owner's stored roster, as decoded from the response `body`.
    async fn fetch_all(&self) -> Result<CharacterCollection, TransportError>;
}
