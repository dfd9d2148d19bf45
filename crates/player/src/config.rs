//! Player configuration, read from the environment with defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CHARBUILD_API_BASE_URL` | [`DEFAULT_API_BASE_URL`] |
//! | `CHARBUILD_OWNER` | [`DEFAULT_OWNER`] |
//! | `CHARBUILD_HTTP_TIMEOUT_SECS` | [`DEFAULT_HTTP_TIMEOUT_SECS`] |

use charbuild_shared::Owner;
pub use charbuild_shared::DEFAULT_OWNER;
use url::Url;

/// Default base URL of the remote character store.
pub const DEFAULT_API_BASE_URL: &str = "https://recruiting.verylongdomaintotestwith.ca/api";

/// Default request timeout for store calls.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Store base URL without a trailing slash.
    pub api_base_url: String,
    pub owner: Owner,
    pub http_timeout_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            owner: Owner::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl PlayerConfig {
    /// Read configuration from the environment.
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("CHARBUILD_API_BASE_URL") {
            match parse_base_url(&raw) {
                Ok(base) => config.api_base_url = base,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid CHARBUILD_API_BASE_URL, using default"
                ),
            }
        }

        if let Some(raw) = lookup("CHARBUILD_OWNER") {
            match Owner::new(raw.as_str()) {
                Ok(owner) => config.owner = owner,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid CHARBUILD_OWNER, using default"
                ),
            }
        }

        if let Some(raw) = lookup("CHARBUILD_HTTP_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout_secs = secs,
                _ => tracing::warn!(
                    value = %raw,
                    "Invalid CHARBUILD_HTTP_TIMEOUT_SECS, using default"
                ),
            }
        }

        config
    }
}

fn parse_base_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)?;
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("unsupported scheme {}", url.scheme());
    }
    Ok(trimmed.to_string())
}

/// Load `.env.local` or `.env` from the repository root, if present.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() && dotenvy::from_path(&path).is_ok() {
            return;
        }
    }
    let _ = dotenvy::dotenv();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PlayerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.owner.as_str(), "goosekeeper233");
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("CHARBUILD_API_BASE_URL", "http://localhost:3001/api/"),
            ("CHARBUILD_OWNER", "tester"),
            ("CHARBUILD_HTTP_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_base_url, "http://localhost:3001/api");
        assert_eq!(config.owner.as_str(), "tester");
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("CHARBUILD_API_BASE_URL", "ftp://example.com"),
            ("CHARBUILD_OWNER", "no/slashes"),
            ("CHARBUILD_HTTP_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config, PlayerConfig::default());
    }
}
