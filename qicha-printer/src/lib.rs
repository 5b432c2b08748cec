//! # qicha-printer
//!
//! Label printer library for sticker printers driven through a Windows
//! driver - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Positioned draw-command documents (text at (x, y), image in rect)
//! - Windows driver printing via GDI (optional, Windows only)
//! - Printer status checks
//! - Logo loading
//!
//! Business logic (WHAT to print) should stay in application code:
//! - Label extraction and layout → label-server
//!
//! ## Example
//!
//! ```ignore
//! use qicha_printer::{FontSpec, LabelBuilder, Printer, WindowsPrinter};
//!
//! const BODY: FontSpec = FontSpec { name: "Arial", height: 24, weight: 400 };
//!
//! // Build a label document
//! let mut builder = LabelBuilder::new("Formatted Label");
//! builder.text(20, 10, BODY, "QICHA BUBBLE TEA");
//! builder.image(20, 50, 175, 88);
//! let doc = builder.build();
//!
//! // Send to the driver printer
//! let printer = WindowsPrinter::new("MPT-II");
//! printer.print(&doc).await?;
//! ```

mod document;
mod error;
mod printer;

#[cfg(feature = "image")]
mod logo;

// Re-exports
pub use document::{DrawOp, FontSpec, LabelBuilder, LabelDocument};
pub use error::{PrintError, PrintResult};
pub use printer::Printer;

#[cfg(feature = "image")]
pub use logo::load_logo;

#[cfg(windows)]
pub use printer::WindowsPrinter;
