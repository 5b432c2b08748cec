//! Label document builder
//!
//! Provides a fluent API for building positioned draw-command documents.
//!
//! A label document is the unit a printer adapter consumes: an ordered
//! sequence of draw commands, each placed in device units with the origin
//! at the top-left of the page. One document corresponds to one printed
//! sticker (one StartDoc/EndDoc bracket on the driver side).

/// Font selection for a text draw command
///
/// Mirrors the driver-level font attributes: face name, cell height in
/// device units and weight (400 regular, 700 bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    pub name: &'static str,
    pub height: i32,
    pub weight: i32,
}

/// A single draw command within a label document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Draw text with the given font, anchored at (x, y)
    Text {
        x: i32,
        y: i32,
        font: FontSpec,
        text: String,
    },
    /// Draw the configured logo image scaled into the given rect
    Image { x: i32, y: i32, width: i32, height: i32 },
}

/// A complete label ready for a printer adapter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelDocument {
    /// Document name shown in the print spooler
    pub name: String,
    /// Draw commands in paint order
    pub ops: Vec<DrawOp>,
}

/// Label document builder
pub struct LabelBuilder {
    doc: LabelDocument,
}

impl LabelBuilder {
    /// Create a new builder with the given spooler document name
    pub fn new(name: &str) -> Self {
        Self {
            doc: LabelDocument {
                name: name.to_string(),
                ops: Vec::with_capacity(16),
            },
        }
    }

    /// Append a text draw command
    pub fn text(&mut self, x: i32, y: i32, font: FontSpec, text: impl Into<String>) -> &mut Self {
        self.doc.ops.push(DrawOp::Text {
            x,
            y,
            font,
            text: text.into(),
        });
        self
    }

    /// Append an image placement
    pub fn image(&mut self, x: i32, y: i32, width: i32, height: i32) -> &mut Self {
        self.doc.ops.push(DrawOp::Image {
            x,
            y,
            width,
            height,
        });
        self
    }

    /// Finish the document
    pub fn build(self) -> LabelDocument {
        self.doc
    }
}
