//! Server configuration
//!
//! # Environment variables
//!
//! Every option can be overridden through the environment:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 5000 | webhook listener port |
//! | PRINTER_NAME | MPT-II | Windows driver name of the sticker printer |
//! | LOGO_PATH | logo.png | store logo drawn on every label |
//! | SQUARE_ACCESS_TOKEN | (empty) | Square API bearer token |
//! | SQUARE_API_URL | https://connect.squareup.com | Square API base URL |
//! | ENVIRONMENT | development | development \| production |
//!
//! # Example
//!
//! ```ignore
//! HTTP_PORT=5000 PRINTER_NAME=MPT-II cargo run
//! ```

#[derive(Debug, Clone)]
pub struct Config {
    /// Webhook listener port
    pub http_port: u16,
    /// Windows driver name of the sticker printer
    pub printer_name: String,
    /// Path to the store logo image
    pub logo_path: String,
    /// Square API bearer token
    pub square_access_token: String,
    /// Square API base URL (overridable for sandbox/testing)
    pub square_api_url: String,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            printer_name: std::env::var("PRINTER_NAME").unwrap_or_else(|_| "MPT-II".into()),
            logo_path: std::env::var("LOGO_PATH").unwrap_or_else(|_| "logo.png".into()),
            square_access_token: std::env::var("SQUARE_ACCESS_TOKEN").unwrap_or_default(),
            square_api_url: std::env::var("SQUARE_API_URL")
                .unwrap_or_else(|_| "https://connect.squareup.com".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
