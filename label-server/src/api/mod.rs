//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`webhook`] - Square order-event listener

pub mod health;
pub mod webhook;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Assemble the full route tree
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(webhook::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
