use insight_view_wasm::domain::insights::payload_to_sections;
use insight_view_wasm::infrastructure::markdown::render_markdown;
use serde_json::json;

#[test]
fn formatter_output_survives_the_markdown_boundary() {
    let payload = json!({ "notes": ["**growing**", "stable"] });
    let sections = payload_to_sections(&payload);
    assert_eq!(sections.len(), 1);

    let html = render_markdown(&sections[0].content);
    assert!(html.contains("<strong>growing</strong>"));
    assert!(html.contains("<br"));
    assert!(html.contains("• stable"));
}

#[test]
fn hostile_payload_content_cannot_inject_markup() {
    let sections = payload_to_sections(&json!("<img src=x onerror=alert(1)>"));
    let html = render_markdown(&sections[0].content);
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}
