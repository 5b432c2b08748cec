//! Square HTTP client
//!
//! Minimal retrieve-order client. Square reports API-level failures inside
//! the response body (`errors`), so any parseable body - success or not -
//! comes back as `Ok`; `Err` means the request itself failed (connect,
//! timeout, undecodable body).

use reqwest::Client;
use thiserror::Error;
use tracing::instrument;

use super::types::RetrieveOrderResponse;

#[derive(Debug, Error)]
pub enum SquareError {
    /// Transport or decode failure
    #[error("Square request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Square order-retrieval client
#[derive(Debug, Clone)]
pub struct SquareClient {
    client: Client,
    base_url: String,
    token: String,
}

impl SquareClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fetch one order by id
    #[instrument(skip(self))]
    pub async fn retrieve_order(&self, order_id: &str) -> Result<RetrieveOrderResponse, SquareError> {
        let url = format!(
            "{}/v2/orders/{}",
            self.base_url.trim_end_matches('/'),
            order_id
        );

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.token),
            )
            .send()
            .await?;

        // Error statuses still carry an `errors` body; parse either way
        Ok(response.json().await?)
    }
}
