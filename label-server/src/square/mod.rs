//! Square order source
//!
//! The order-retrieval API is an external collaborator: this module only
//! knows how to fetch one order by id and hand back the response shape,
//! errors included. Everything downstream treats that shape as read-only
//! input.

pub mod client;
pub mod types;

pub use client::{SquareClient, SquareError};
pub use types::{ApiError, LineItem, Modifier, Order, RetrieveOrderResponse};
