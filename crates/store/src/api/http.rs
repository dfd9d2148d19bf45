//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use charbuild_shared::{Owner, ServerAck};

use crate::infrastructure::memory::InMemoryCharacterStore;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<InMemoryCharacterStore>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/{owner}/character",
            get(fetch_characters).post(save_characters),
        )
}

async fn health() -> &'static str {
    "OK"
}

/// Envelope for a fetched roster; records are passed through as stored.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchEnvelope {
    status_code: u16,
    body: Vec<Value>,
}

async fn fetch_characters(
    State(store): State<Arc<InMemoryCharacterStore>>,
    Path(owner): Path<String>,
) -> Result<Json<FetchEnvelope>, ApiError> {
    let owner = parse_owner(owner)?;
    let body = store.load(&owner).await;
    tracing::debug!(owner = %owner, count = body.len(), "Fetched characters");
    Ok(Json(FetchEnvelope {
        status_code: 200,
        body,
    }))
}

async fn save_characters(
    State(store): State<Arc<InMemoryCharacterStore>>,
    Path(owner): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ServerAck>, ApiError> {
    let owner = parse_owner(owner)?;
    let Value::Array(records) = body else {
        return Err(ApiError::BadRequest(
            "Expected a JSON array of characters".to_string(),
        ));
    };
    let count = store.save(owner.clone(), records).await;
    tracing::info!(owner = %owner, count, "Saved characters");
    Ok(Json(ServerAck::saved(&owner, count)))
}

fn parse_owner(raw: String) -> Result<Owner, ApiError> {
    Owner::new(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}
