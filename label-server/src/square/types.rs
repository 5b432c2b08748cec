//! Square retrieve-order response models
//!
//! Only the fields the label pipeline reads are modelled. Every field is
//! defaulted so a sparse or malformed payload deserializes into empty
//! values instead of failing - the extractor owns the degraded-input
//! behavior, not the deserializer.

use serde::{Deserialize, Serialize};

/// Response of `GET /v2/orders/{order_id}`
///
/// On success `order` is populated; on failure Square returns `errors`
/// instead. Both absent means an empty order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrieveOrderResponse {
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// One commerce order, possibly containing multiple drink line items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// One ordered drink entry within an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItem {
    /// Drink name
    #[serde(default)]
    pub name: String,
    /// Size, e.g. "Large"
    #[serde(default)]
    pub variation_name: String,
    /// Free-text note attached at the register
    #[serde(default)]
    pub note: String,
    /// Square sends quantity as a decimal string
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
}

/// A free-text customization attached to a line item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Modifier {
    #[serde(default)]
    pub name: String,
}

/// Square API error entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub detail: Option<String>,
}

fn default_quantity() -> String {
    "1".to_string()
}
