//! Character store wire contract
//!
//! The remote store keeps one JSON blob per owner:
//!
//! - `POST {base}/{owner}/character` with the roster as a JSON array; the
//!   response body is an acknowledgement echoed back to the caller.
//! - `GET {base}/{owner}/character` returns `{ "statusCode": ..., "body": [...] }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use charbuild_domain::CharacterCollection;

/// Path segment naming the character resource under an owner.
pub const CHARACTER_RESOURCE: &str = "character";

/// Owner used when none is configured.
pub const DEFAULT_OWNER: &str = "goosekeeper233";

/// Error when an owner segment cannot be used in a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnerError {
    #[error("Owner cannot be empty")]
    Empty,
    #[error("Owner contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// The owner segment scoping a roster in the store (e.g. a username).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Owner(String);

impl Owner {
    pub fn new(value: impl Into<String>) -> Result<Self, OwnerError> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(OwnerError::Empty);
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(OwnerError::InvalidCharacter(c));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self(DEFAULT_OWNER.to_string())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Owner {
    type Err = OwnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Owner {
    type Error = OwnerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> Self {
        owner.0
    }
}

/// Path of an owner's roster, relative to the store base URL.
pub fn character_path(owner: &Owner) -> String {
    format!("/{}/{}", owner, CHARACTER_RESOURCE)
}

/// Response to a roster fetch. The roster itself is the nested `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCharactersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub body: CharacterCollection,
}

impl FetchCharactersResponse {
    pub fn ok(body: CharacterCollection) -> Self {
        Self {
            status_code: Some(200),
            body,
        }
    }
}

/// Whatever the store answers to a save, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerAck(pub serde_json::Value);

impl ServerAck {
    /// Standard acknowledgement the reference store sends for a save.
    pub fn saved(owner: &Owner, count: usize) -> Self {
        Self(serde_json::json!({
            "statusCode": 200,
            "body": format!("Saved {} character(s) for {}", count, owner),
        }))
    }

    /// Acknowledgement from a raw response body.
    ///
    /// JSON bodies are kept as parsed, an empty body is `null`, and any other
    /// text is kept as a JSON string.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self(serde_json::Value::Null);
        }
        serde_json::from_str(body)
            .unwrap_or_else(|_| Self(serde_json::Value::String(body.to_string())))
    }

    /// The human-readable `body`, when the acknowledgement carries one.
    pub fn message(&self) -> Option<&str> {
        self.0.get("body").and_then(serde_json::Value::as_str)
    }
}
