//! Square webhook handler
//!
//! One event per order. The acknowledgment is fixed by policy: whatever
//! happens inside - bad payload, fetch failure, printer offline - Square
//! gets a 200 back, because a retried webhook would reprint labels the
//! staff already has.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::ServerState;

/// Square order-created event payload (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub data: Option<WebhookData>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookData {
    #[serde(default)]
    pub id: Option<String>,
}

/// Fixed success acknowledgment
#[derive(Serialize)]
pub struct WebhookAck {
    message: &'static str,
}

const ACK: WebhookAck = WebhookAck {
    message: "Webhook received",
};

/// Handle an order-created event: print one sticker per drink
pub async fn order_event(
    State(state): State<ServerState>,
    Json(event): Json<WebhookEvent>,
) -> Json<WebhookAck> {
    let Some(order_id) = event.data.and_then(|d| d.id) else {
        warn!("Invalid webhook payload, ignoring");
        return Json(ACK);
    };

    info!(order_id = %order_id, "Order event received");
    let printed = state.printing.process_order(&order_id).await;
    info!(order_id = %order_id, printed, "Order event handled");

    Json(ACK)
}
