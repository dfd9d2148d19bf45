//! Roster Service - saves and fetches the whole roster
//!
//! Depends only on [`CharacterStorePort`], so the UI never sees reqwest or
//! the wire envelope.

use std::sync::Arc;

use charbuild_domain::CharacterCollection;
use charbuild_shared::ServerAck;

use crate::ports::outbound::{CharacterStorePort, TransportError};

#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn CharacterStorePort>,
}

impl RosterService {
    pub fn new(store: Arc<dyn CharacterStorePort>) -> Self {
        Self { store }
    }

    /// Send every record to the store, replacing what it held.
    pub async fn save_all(&self, roster: &CharacterCollection) -> Result<ServerAck, TransportError> {
        match self.store.save_all(roster).await {
            Ok(ack) => {
                tracing::info!(records = roster.len(), "Characters saved successfully");
                Ok(ack)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save characters");
                Err(e)
            }
        }
    }

    pub async fn fetch_all(&self) -> Result<CharacterCollection, TransportError> {
        match self.store.fetch_all().await {
            Ok(roster) => {
                tracing::info!(records = roster.len(), "Characters fetched successfully");
                Ok(roster)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch characters");
                Err(e)
            }
        }
    }

    /// Replace `roster` with the stored one and return the new record count.
    ///
    /// On failure `roster` is left as it was.
    pub async fn refresh(&self, roster: &mut CharacterCollection) -> Result<usize, TransportError> {
        let fetched = self.fetch_all().await?;
        *roster = fetched;
        Ok(roster.len())
    }
}
