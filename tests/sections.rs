use insight_view_wasm::domain::insights::{Section, payload_to_sections};
use serde_json::{Value, json};

#[test]
fn falsy_payloads_produce_no_sections() {
    assert_eq!(payload_to_sections(&Value::Null), vec![]);
    assert_eq!(payload_to_sections(&json!("")), vec![]);
    assert_eq!(payload_to_sections(&json!(0)), vec![]);
    assert_eq!(payload_to_sections(&json!(0.0)), vec![]);
    assert_eq!(payload_to_sections(&json!(false)), vec![]);
}

#[test]
fn string_payload_splits_into_untitled_paragraphs() {
    let sections = payload_to_sections(&json!("Para one.\n\nPara two."));
    assert_eq!(
        sections,
        vec![
            Section::untitled("Para one.".to_string()),
            Section::untitled("Para two.".to_string()),
        ]
    );
}

#[test]
fn single_paragraph_is_one_section() {
    let sections = payload_to_sections(&json!("Only line one.\nStill the same paragraph."));
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].content, "Only line one.\nStill the same paragraph.");
    assert!(!sections[0].has_title());
}

#[test]
fn whitespace_only_paragraphs_are_dropped() {
    let sections = payload_to_sections(&json!("First.\n\n   \n\n\nSecond.\n\n"));
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].content, "First.");
    assert_eq!(sections[1].content, "Second.");
}

#[test]
fn array_payload_gets_sequential_insight_titles() {
    let sections = payload_to_sections(&json!(["x", "y"]));
    assert_eq!(
        sections,
        vec![
            Section::titled("Insight 1", "x".to_string()),
            Section::titled("Insight 2", "y".to_string()),
        ]
    );
}

#[test]
fn empty_array_elements_keep_their_titles() {
    let sections = payload_to_sections(&json!(["x", ""]));
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].title.as_deref(), Some("Insight 2"));
    assert_eq!(sections[1].content, "");
}

#[test]
fn object_payload_uses_humanized_keys_as_titles() {
    let payload = json!({ "revenue": 500, "notes": ["growing", "stable"] });
    let sections = payload_to_sections(&payload);
    assert_eq!(
        sections,
        vec![
            Section::titled("Revenue", "500".to_string()),
            Section::titled("Notes", "• growing\n• stable".to_string()),
        ]
    );
}

#[test]
fn other_truthy_payloads_become_one_untitled_section() {
    assert_eq!(payload_to_sections(&json!(42)), vec![Section::untitled("42".to_string())]);
    assert_eq!(payload_to_sections(&json!(true)), vec![Section::untitled("true".to_string())]);
}
