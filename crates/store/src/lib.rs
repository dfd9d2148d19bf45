//! Character Builder Store - reference implementation of the remote character store.
//!
//! Keeps one roster per owner in memory and serves the same two endpoints the
//! hosted store exposes. Used for local development and round-trip tests.

pub mod api;
pub mod config;
pub mod infrastructure;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::StoreConfig;
pub use infrastructure::memory::InMemoryCharacterStore;

/// Build the full router over a fresh in-memory store.
pub fn app() -> Router {
    app_with_store(Arc::new(InMemoryCharacterStore::new()))
}

/// Build the full router over an existing store.
pub fn app_with_store(store: Arc<InMemoryCharacterStore>) -> Router {
    api::http::routes()
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}
