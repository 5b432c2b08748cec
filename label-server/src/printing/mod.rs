//! Print execution
//!
//! Runs the full pipeline for one webhook event: fetch the order, extract
//! label records, render each one and hand it to the sticker printer.

pub mod service;

pub use service::LabelPrintService;
