//! End-to-end pipeline test: Square order JSON → extraction → layout

use chrono::NaiveDate;
use label_server::square::RetrieveOrderResponse;
use label_server::{DrinkCodes, LabelExtractor, LabelRenderer};
use qicha_printer::DrawOp;

fn sample_order() -> RetrieveOrderResponse {
    serde_json::from_str(
        r#"{
            "order": {
                "id": "sq-3f2a",
                "line_items": [
                    {
                        "name": "Fruit Milk Tea",
                        "variation_name": "Large",
                        "note": "birthday order",
                        "quantity": "2",
                        "modifiers": [
                            { "name": "Less Ice" },
                            { "name": "Peach" },
                            { "name": "Brown Sugar" },
                            { "name": "Boba" },
                            { "name": "Coconut Jelly" },
                            { "name": "write happy bday" }
                        ]
                    },
                    {
                        "name": "Matcha Latte",
                        "variation_name": "Regular",
                        "quantity": "1",
                        "modifiers": [
                            { "name": "Oat Milk" }
                        ]
                    }
                ]
            }
        }"#,
    )
    .unwrap()
}

fn fixed_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// Text of the last op drawn at the given position (later ops paint over
/// earlier ones)
fn text_at(ops: &[DrawOp], x: i32, y: i32) -> &str {
    ops.iter()
        .rev()
        .find_map(|op| match op {
            DrawOp::Text {
                x: ox,
                y: oy,
                text,
                ..
            } if *ox == x && *oy == y => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text op at ({x}, {y})"))
}

#[test]
fn order_produces_one_label_per_drink() {
    let extractor = LabelExtractor::new();
    let labels = extractor.extract(&sample_order());

    // 2 + 1 drinks
    assert_eq!(labels.len(), 3);
    assert!(labels.iter().all(|l| l.order_id == labels[0].order_id));
    assert_eq!(labels[0], labels[1]);
}

#[test]
fn classification_routes_every_modifier() {
    let extractor = LabelExtractor::new();
    let labels = extractor.extract(&sample_order());

    let fruit_tea = &labels[0];
    assert_eq!(fruit_tea.ice, "Less");
    assert_eq!(fruit_tea.sweetener, "Brown Sugar");
    assert_eq!(fruit_tea.flavours, vec!["Peach".to_string()]);
    assert_eq!(
        fruit_tea.toppings,
        vec!["Boba".to_string(), "Coconut Jelly".to_string()]
    );
    assert_eq!(fruit_tea.notes, "birthday order write happy bday");

    let latte = &labels[2];
    assert_eq!(latte.alternative, "Oat");
    assert_eq!(latte.size, "Regular");
}

#[test]
fn rendered_labels_use_abbreviated_codes() {
    let extractor = LabelExtractor::new();
    let renderer = LabelRenderer::new(DrinkCodes::standard());
    let labels = extractor.extract(&sample_order());

    let doc = renderer.render(&labels[0], fixed_time());

    assert_eq!(text_at(&doc.ops, 210, 48), "Lrg");
    assert_eq!(text_at(&doc.ops, 260, 48), "Fruit Milk Tea");
    assert_eq!(text_at(&doc.ops, 210, 70), "Peach");
    // ice "Less" and sweetener "Bs" occupy their slots
    assert_eq!(text_at(&doc.ops, 210, 92), "Less           Bs   ");
    assert_eq!(text_at(&doc.ops, 210, 114), "Boba  CJ  ");
    // compact layout: only one topping line, notes land at y=158
    assert_eq!(text_at(&doc.ops, 210, 158), "birthday order write happy bday");
}

#[test]
fn error_fetch_result_yields_zero_labels() {
    let extractor = LabelExtractor::new();
    let response: RetrieveOrderResponse = serde_json::from_str(
        r#"{"errors":[{"category":"INVALID_REQUEST_ERROR","code":"NOT_FOUND","detail":"order not found"}]}"#,
    )
    .unwrap();

    assert!(extractor.extract(&response).is_empty());
}

#[test]
fn rendering_is_idempotent() {
    let extractor = LabelExtractor::new();
    let renderer = LabelRenderer::new(DrinkCodes::standard());
    let labels = extractor.extract(&sample_order());

    let first = renderer.render(&labels[0], fixed_time());
    let second = renderer.render(&labels[0], fixed_time());
    assert_eq!(first, second);
}
