//! Label renderer
//!
//! Lays one label record out on the fixed sticker geometry: a constant
//! header block (title, logo, timestamp, order id) on the left and the
//! drink details in a narrow column on the right. All coordinates are
//! printer device units, matched to the MPT-II sticker size.
//!
//! Rendering is a pure function of (record, code table, timestamp): no
//! clock reads, no hidden state.

use chrono::NaiveDateTime;
use qicha_printer::{FontSpec, LabelBuilder, LabelDocument};

use super::extract::LabelRecord;
use super::vocab::DrinkCodes;

const PADDING: i32 = 10;

/// Left edge of the details column
const DETAIL_X: i32 = PADDING + 200;

/// A topping line takes another code only while its running length stays
/// under this many characters; overflow rolls to the next line.
const TOPPING_LINE_LIMIT: usize = 16;

pub const TITLE_FONT: FontSpec = FontSpec {
    name: "Arial",
    height: 42,
    weight: 700,
};
pub const BODY_FONT: FontSpec = FontSpec {
    name: "Arial",
    height: 24,
    weight: 400,
};
pub const DETAILS_FONT: FontSpec = FontSpec {
    name: "Arial",
    height: 24,
    weight: 700,
};
pub const SEPARATOR_FONT: FontSpec = FontSpec {
    name: "Arial",
    height: 8,
    weight: 200,
};

/// Label renderer
pub struct LabelRenderer {
    codes: DrinkCodes,
}

impl LabelRenderer {
    /// Create a renderer with the given abbreviation table
    pub fn new(codes: DrinkCodes) -> Self {
        Self { codes }
    }

    /// Render a label record to a draw-command document
    ///
    /// `printed_at` is stamped into the header; passing it in keeps the
    /// function deterministic.
    pub fn render(&self, record: &LabelRecord, printed_at: NaiveDateTime) -> LabelDocument {
        let mut b = LabelBuilder::new("Formatted Label");

        self.render_header(&mut b, record, printed_at);
        self.render_details(&mut b, record);

        b.build()
    }

    /// Constant header block: title, logo, separator, timestamp, order id
    fn render_header(&self, b: &mut LabelBuilder, record: &LabelRecord, printed_at: NaiveDateTime) {
        b.text(PADDING + 10, 10, TITLE_FONT, "QICHA BUBBLE TEA");
        b.image(PADDING + 10, 50, 175, 88);

        // A tiny dot below the details forces the driver to feed the full
        // sticker height
        b.text(PADDING + 10, 310, SEPARATOR_FONT, ".");

        let timestamp = printed_at.format("%H:%M - %d/%m/%Y").to_string();
        b.text(PADDING + 10, 150, BODY_FONT, timestamp);
        b.text(PADDING + 10, 170, BODY_FONT, "ID:");
        b.text(PADDING + 40, 170, DETAILS_FONT, record.order_id.clone());
    }

    /// Details column: size+drink, flavours, modifiers, toppings, notes
    fn render_details(&self, b: &mut LabelBuilder, record: &LabelRecord) {
        b.text(DETAIL_X, 48, DETAILS_FONT, size_code(&record.size));
        b.text(DETAIL_X + 50, 48, BODY_FONT, self.codes.code(&record.drink));

        b.text(DETAIL_X, 70, BODY_FONT, self.flavour_line(record));
        b.text(DETAIL_X, 92, BODY_FONT, self.modifier_line(record));

        let toppings = self.topping_lines(&record.toppings);
        b.text(DETAIL_X, 114, BODY_FONT, toppings[0].clone());
        b.text(DETAIL_X, 136, BODY_FONT, toppings[1].clone());
        b.text(DETAIL_X, 158, BODY_FONT, toppings[2].clone());

        // Compact layout when a single topping line suffices
        let notes_y = if toppings[1].is_empty() { 158 } else { 180 };
        b.text(DETAIL_X, notes_y, BODY_FONT, record.notes.clone());
    }

    /// All abbreviated flavours on one comma-joined line (no wrapping)
    fn flavour_line(&self, record: &LabelRecord) -> String {
        record
            .flavours
            .iter()
            .map(|f| self.codes.code(f))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Four fixed slots in order: ice, sweetness, alternative, sweetener
    ///
    /// An unset slot (or one holding "Regular"/"None") renders as four
    /// blanks so the following slots keep their columns.
    fn modifier_line(&self, record: &LabelRecord) -> String {
        let mut line = String::new();
        for value in [
            &record.ice,
            &record.sweetness,
            &record.alternative,
            &record.sweetener,
        ] {
            if matches!(value.as_str(), "" | "Regular" | "None") {
                line.push_str("    ");
            } else {
                line.push_str(self.codes.code(value));
                line.push_str("   ");
            }
        }
        line
    }

    /// Greedy first-fit packing of topping codes into three lines
    ///
    /// Codes keep their original order; the third line takes all the
    /// overflow unchecked (cap-at-3 policy, last line unbounded).
    fn topping_lines(&self, toppings: &[String]) -> [String; 3] {
        let mut lines: [String; 3] = Default::default();
        for topping in toppings {
            let code = self.codes.code(topping);
            let line = if lines[0].len() + code.len() < TOPPING_LINE_LIMIT {
                &mut lines[0]
            } else if lines[1].len() + code.len() < TOPPING_LINE_LIMIT {
                &mut lines[1]
            } else {
                &mut lines[2]
            };
            line.push_str(code);
            line.push_str("  ");
        }
        lines
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(DrinkCodes::standard())
    }
}

/// "Lrg" for large drinks, "Reg" for everything else
fn size_code(size: &str) -> &'static str {
    if size.eq_ignore_ascii_case("large") {
        "Lrg"
    } else {
        "Reg"
    }
}
