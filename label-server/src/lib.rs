//! QiCha Label Server - drink label printing for the QiCha bubble tea shop
//!
//! # Architecture overview
//!
//! Square fires an order-created webhook; this server fetches the order,
//! classifies every line-item modifier into structured label fields, and
//! prints one sticker per physical drink.
//!
//! - **HTTP API** (`api`): webhook listener and health check
//! - **Order source** (`square`): Square retrieve-order client
//! - **Labels** (`labels`): modifier classification and label layout
//! - **Printing** (`printing`): per-label print execution
//!
//! # Module structure
//!
//! ```text
//! label-server/src/
//! ├── core/          # config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── square/        # order source client
//! ├── labels/        # extraction + layout (the core logic)
//! ├── printing/      # print execution
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod labels;
pub mod printing;
pub mod square;
pub mod utils;

// Re-export public types
pub use self::core::{Config, Server, ServerState};
pub use labels::{DrinkCodes, LabelExtractor, LabelRecord, LabelRenderer, OrderSequence};
pub use printing::LabelPrintService;
pub use square::SquareClient;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ____  _ ______ __
  / __ \(_) ____// /_  ____ _
 / / / / / /    / __ \/ __ `/
/ /_/ / / /___ / / / / /_/ /
\___\_\_\____//_/ /_/\__,_/
        label server
    "#
    );
}
