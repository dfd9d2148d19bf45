//! Application services - use cases the UI calls into

pub mod roster_service;

pub use roster_service::RosterService;
