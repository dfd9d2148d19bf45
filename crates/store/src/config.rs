//! Store configuration, read from the environment.

use std::net::SocketAddr;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Default port, chosen to sit next to the player dev server.
pub const DEFAULT_STORE_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated origins, or `*`. CORS is off when unset.
    pub cors_allowed_origins: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_STORE_PORT,
            cors_allowed_origins: None,
        }
    }
}

impl StoreConfig {
    /// Read `STORE_HOST`, `STORE_PORT` (or `PORT`) and `CORS_ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("STORE_HOST").unwrap_or(defaults.host);
        let port = std::env::var("STORE_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_allowed_origins,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// CORS layer for browser players, if origins are configured.
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        let allowed_origins = self.cors_allowed_origins.as_deref()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);

        if allowed_origins == "*" {
            return Some(cors.allow_origin(Any));
        }

        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        Some(cors.allow_origin(origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_parses() {
        let addr = StoreConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), DEFAULT_STORE_PORT);
    }

    #[test]
    fn cors_is_off_without_origins() {
        assert!(StoreConfig::default().cors_layer().is_none());
    }

    #[test]
    fn cors_accepts_wildcard_and_lists() {
        let wildcard = StoreConfig {
            cors_allowed_origins: Some("*".into()),
            ..StoreConfig::default()
        };
        assert!(wildcard.cors_layer().is_some());

        let listed = StoreConfig {
            cors_allowed_origins: Some("http://localhost:8080, http://127.0.0.1:8080".into()),
            ..StoreConfig::default()
        };
        assert!(listed.cors_layer().is_some());

        let blank = StoreConfig {
            cors_allowed_origins: Some(" , ".into()),
            ..StoreConfig::default()
        };
        assert!(blank.cors_layer().is_none());
    }
}
