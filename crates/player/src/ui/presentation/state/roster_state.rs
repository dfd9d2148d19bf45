//! Roster state management
//!
//! The roster is the single source of truth for every sheet on screen.
//! Sheets receive an owned copy of their record and hand edits back by id.

use dioxus::prelude::*;

use charbuild_domain::{CharacterCollection, CharacterData, CharacterId, DomainError};

/// Severity of a banner message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    /// A rejected edit, e.g. an exhausted point budget.
    Warning,
    Error,
}

/// A message shown above the roster until dismissed or replaced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Notice for a refused edit: point-budget limits warn, anything else errors.
    pub fn rejection(error: &DomainError) -> Self {
        if error.is_allocation_limit() {
            Self::warning(error.to_string())
        } else {
            Self::error(error.to_string())
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Warning => "notice notice-warning",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct RosterState {
    pub roster: Signal<CharacterCollection>,
    pub notice: Signal<Option<Notice>>,
    /// True while a save or fetch is in flight
    pub busy: Signal<bool>,
}

impl RosterState {
    /// Create a RosterState holding one default character
    pub fn new() -> Self {
        Self {
            roster: Signal::new(CharacterCollection::new()),
            notice: Signal::new(None),
            busy: Signal::new(false),
        }
    }

    pub fn add_character(&mut self) -> CharacterId {
        let id = self.roster.write().add();
        tracing::debug!(%id, "Added character");
        id
    }

    pub fn reset(&mut self) {
        self.roster.write().clear();
        tracing::debug!("Cleared roster");
    }

    pub fn update_character(&mut self, id: CharacterId, data: CharacterData) {
        if !self.roster.write().update_by_id(id, data) {
            tracing::warn!(%id, "Edit for a character that is no longer in the roster");
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice.set(Some(notice));
    }

    pub fn reject(&mut self, error: &DomainError) {
        tracing::debug!(error = %error, "Edit rejected");
        self.notify(Notice::rejection(error));
    }

    pub fn dismiss(&mut self) {
        self.notice.set(None);
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}
