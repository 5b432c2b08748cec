//! Server state - shared references to the services behind the HTTP API

use std::sync::Arc;

use crate::core::Config;
use crate::printing::LabelPrintService;
use crate::square::SquareClient;

/// Server state - holds shared service references
///
/// `ServerState` is cloned into every request handler; `Arc` makes the
/// clone shallow.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | `Arc<Config>` | configuration (immutable) |
/// | printing | `Arc<LabelPrintService>` | fetch → extract → render → print pipeline |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub printing: Arc<LabelPrintService>,
}

impl ServerState {
    /// Build the service graph from configuration
    pub fn initialize(config: &Config) -> Self {
        let square = SquareClient::new(&config.square_api_url, &config.square_access_token);
        let printing = LabelPrintService::new(square, &config.printer_name, &config.logo_path);

        Self {
            config: Arc::new(config.clone()),
            printing: Arc::new(printing),
        }
    }
}
