//! Square webhook route
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /webhook | POST | order-created event | none |

pub mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Webhook route - public (Square calls it directly)
pub fn router() -> Router<ServerState> {
    Router::new().route("/webhook", post(handler::order_event))
}
