//! Label extraction
//!
//! Turns one raw order into a sequence of structured label records, one
//! per physical drink unit. Extraction never fails: malformed input
//! degrades to empty/default field values, and an error-shaped fetch
//! result simply yields zero records.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::warn;

use super::classify::{Classified, Slot, classify};
use crate::square::{LineItem, RetrieveOrderResponse};

/// Monotonic per-process order sequence
///
/// Every order gets the next number, shared by all of its labels so the
/// counter staff can group stickers by order. The sequence lives in
/// memory only: it resets on restart, so ids are unique within one
/// process lifetime and no further.
#[derive(Debug, Default)]
pub struct OrderSequence(AtomicU64);

impl OrderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next order id
    pub fn next_id(&self) -> String {
        self.0.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

/// The structured, per-drink representation produced by classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRecord {
    /// Sequential order id, shared by every label of one order
    pub order_id: String,
    /// Drink size, verbatim from the variation name
    pub size: String,
    /// Drink name, verbatim
    pub drink: String,
    /// Flavour modifiers in order of appearance
    pub flavours: Vec<String>,
    /// Milk alternative, empty if none
    pub alternative: String,
    /// Ice level, empty if none
    pub ice: String,
    /// Sweetness level, empty if none
    pub sweetness: String,
    /// Sweetener type, empty if none
    pub sweetener: String,
    /// Topping modifiers in order of appearance
    pub toppings: Vec<String>,
    /// Line-item note plus any unclassified modifiers
    pub notes: String,
}

/// Label extractor
///
/// Owns the order sequence; one `extract` call consumes one sequence
/// number regardless of how many labels come out of it.
#[derive(Debug, Default)]
pub struct LabelExtractor {
    sequence: OrderSequence,
}

impl LabelExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor around an existing sequence
    pub fn with_sequence(sequence: OrderSequence) -> Self {
        Self { sequence }
    }

    /// Extract one label record per physical drink unit
    ///
    /// Each line item contributes `quantity` identical records; all
    /// records of the call share one order id.
    pub fn extract(&self, response: &RetrieveOrderResponse) -> Vec<LabelRecord> {
        let order_id = self.sequence.next_id();

        if !response.errors.is_empty() {
            warn!(order_id = %order_id, errors = response.errors.len(), "Order fetch returned errors, no labels");
        }

        let Some(order) = &response.order else {
            return Vec::new();
        };

        let mut labels = Vec::new();
        for item in &order.line_items {
            let record = self.build_record(&order_id, item);
            let quantity: u32 = item.quantity.trim().parse().unwrap_or(1);
            for _ in 0..quantity {
                labels.push(record.clone());
            }
        }

        labels
    }

    /// Classify one line item's modifiers into a label record
    fn build_record(&self, order_id: &str, item: &LineItem) -> LabelRecord {
        let mut record = LabelRecord {
            order_id: order_id.to_string(),
            size: item.variation_name.trim().to_string(),
            drink: item.name.trim().to_string(),
            flavours: Vec::new(),
            alternative: String::new(),
            ice: String::new(),
            sweetness: String::new(),
            sweetener: String::new(),
            toppings: Vec::new(),
            notes: String::new(),
        };

        let mut unclassified = Vec::new();
        for modifier in &item.modifiers {
            match classify(&modifier.name) {
                Classified::Slot(Slot::Ice, value) => record.ice = value,
                Classified::Slot(Slot::Sweetness, value) => record.sweetness = value,
                Classified::Slot(Slot::Alternative, value) => record.alternative = value,
                Classified::Slot(Slot::Sweetener, value) => record.sweetener = value,
                Classified::Slot(Slot::Flavour, value) => record.flavours.push(value),
                Classified::Slot(Slot::Topping, value) => record.toppings.push(value),
                Classified::Empty => {}
                Classified::Unclassified(value) => unclassified.push(value),
            }
        }

        record.notes = item.note.trim().to_string();
        if !unclassified.is_empty() {
            if record.notes.is_empty() {
                record.notes = unclassified.join(" ");
            } else {
                record.notes.push(' ');
                record.notes.push_str(&unclassified.join(" "));
            }
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::{Modifier, Order};

    fn modifiers(names: &[&str]) -> Vec<Modifier> {
        names
            .iter()
            .map(|n| Modifier {
                name: n.to_string(),
            })
            .collect()
    }

    fn response_with_items(items: Vec<LineItem>) -> RetrieveOrderResponse {
        RetrieveOrderResponse {
            order: Some(Order {
                id: "sq-order-1".to_string(),
                line_items: items,
            }),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_one_label_per_drink_unit() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![
            LineItem {
                name: "Milk Tea".to_string(),
                quantity: "3".to_string(),
                ..Default::default()
            },
            LineItem {
                name: "Fruit Tea".to_string(),
                quantity: "2".to_string(),
                ..Default::default()
            },
        ]);

        let labels = extractor.extract(&response);
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn test_labels_of_one_order_share_an_id() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Milk Tea".to_string(),
            quantity: "4".to_string(),
            ..Default::default()
        }]);

        let labels = extractor.extract(&response);
        assert!(labels.iter().all(|l| l.order_id == labels[0].order_id));
    }

    #[test]
    fn test_order_ids_increase_across_orders() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem::default()]);

        let first = extractor.extract(&response)[0].order_id.clone();
        let second = extractor.extract(&response)[0].order_id.clone();

        let first: u64 = first.parse().unwrap();
        let second: u64 = second.parse().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_large_milk_tea_with_modifiers() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Milk Tea".to_string(),
            variation_name: "Large".to_string(),
            quantity: "2".to_string(),
            modifiers: modifiers(&["Less Sweetness", "Oat Milk", "Boba"]),
            ..Default::default()
        }]);

        let labels = extractor.extract(&response);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0], labels[1]);

        let label = &labels[0];
        assert_eq!(label.size, "Large");
        assert_eq!(label.drink, "Milk Tea");
        assert_eq!(label.sweetness, "Less");
        assert_eq!(label.alternative, "Oat");
        assert_eq!(label.toppings, vec!["Boba".to_string()]);
        assert!(label.flavours.is_empty());
        assert_eq!(label.notes, "");
    }

    #[test]
    fn test_malformed_quantity_falls_back_to_one() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Milk Tea".to_string(),
            quantity: "two".to_string(),
            ..Default::default()
        }]);

        assert_eq!(extractor.extract(&response).len(), 1);
    }

    #[test]
    fn test_unclassified_modifiers_join_the_note() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Fruit Tea".to_string(),
            note: "for Sam".to_string(),
            modifiers: modifiers(&["Peach", "no straw", "extra napkins"]),
            ..Default::default()
        }]);

        let label = &extractor.extract(&response)[0];
        assert_eq!(label.flavours, vec!["Peach".to_string()]);
        assert_eq!(label.notes, "for Sam no straw extra napkins");
    }

    #[test]
    fn test_unclassified_modifiers_alone_become_the_note() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Fruit Tea".to_string(),
            modifiers: modifiers(&["no straw"]),
            ..Default::default()
        }]);

        assert_eq!(extractor.extract(&response)[0].notes, "no straw");
    }

    #[test]
    fn test_ice_modifier_sets_only_the_ice_field() {
        let extractor = LabelExtractor::new();
        let response = response_with_items(vec![LineItem {
            name: "Milk Tea".to_string(),
            modifiers: modifiers(&["extra ice"]),
            ..Default::default()
        }]);

        let label = &extractor.extract(&response)[0];
        assert_eq!(label.ice, "Extra");
        assert!(label.toppings.is_empty());
        assert!(label.flavours.is_empty());
        assert_eq!(label.notes, "");
    }

    #[test]
    fn test_error_response_yields_no_labels() {
        let extractor = LabelExtractor::new();
        let response = RetrieveOrderResponse {
            order: None,
            errors: vec![crate::square::ApiError {
                category: "INVALID_REQUEST_ERROR".to_string(),
                code: "NOT_FOUND".to_string(),
                detail: None,
            }],
        };

        assert!(extractor.extract(&response).is_empty());
    }

    #[test]
    fn test_error_response_still_consumes_a_sequence_number() {
        let extractor = LabelExtractor::new();
        let empty = RetrieveOrderResponse::default();
        extractor.extract(&empty);

        let response = response_with_items(vec![LineItem::default()]);
        let id: u64 = extractor.extract(&response)[0].order_id.parse().unwrap();
        assert_eq!(id, 1);
    }
}
