//! Presentation state held in Dioxus signals

pub mod roster_state;

pub use roster_state::{Notice, NoticeKind, RosterState};
