//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context instead of
//! constructing infrastructure adapters themselves.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::RosterService;
use crate::ports::outbound::CharacterStorePort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub roster: Arc<RosterService>,
}

impl Services {
    pub fn new(store: Arc<dyn CharacterStorePort>) -> Self {
        Self {
            roster: Arc::new(RosterService::new(store)),
        }
    }
}

/// Hook to access the RosterService from context
pub fn use_roster_service() -> Arc<RosterService> {
    let services = use_context::<Services>();
    services.roster.clone()
}
