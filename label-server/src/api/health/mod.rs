//! Health check route
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /health | GET | simple health check | none |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check route - public (no auth)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Basic health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
