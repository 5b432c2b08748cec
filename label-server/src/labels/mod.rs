//! Label extraction and layout - the core of the label pipeline
//!
//! Two stages, consumed in sequence:
//!
//! 1. [`LabelExtractor`] turns one raw order into one [`LabelRecord`] per
//!    physical drink, classifying free-text modifiers into structured
//!    fields.
//! 2. [`LabelRenderer`] lays each record out as a positioned draw-command
//!    document for the sticker printer.

pub mod classify;
pub mod extract;
pub mod renderer;
pub mod vocab;

pub use classify::{Classified, Slot, classify};
pub use extract::{LabelExtractor, LabelRecord, OrderSequence};
pub use renderer::LabelRenderer;
pub use vocab::DrinkCodes;
