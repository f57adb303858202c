use insight_view_wasm::domain::insights::{AnalysisReport, CompanySymbol};
use serde_json::json;

#[test]
fn report_sections_come_from_the_payload() {
    let payload = json!({ "revenue": 500, "verdict": "hold" });
    let report = AnalysisReport::from_payload(CompanySymbol::from("IPL"), &payload, None);
    assert_eq!(report.section_count(), 2);
    assert!(!report.is_empty());
    assert_eq!(report.sections[0].title.as_deref(), Some("Revenue"));
    assert_eq!(report.sections[1].content, "hold");
}

#[test]
fn falsy_payload_gives_an_empty_report() {
    let report = AnalysisReport::from_payload(CompanySymbol::from("IPL"), &json!(null), None);
    assert!(report.is_empty());
    assert_eq!(report.section_count(), 0);
}

#[test]
fn metadata_summary_lists_scalar_fields_with_humanized_labels() {
    let metadata = json!({ "model": "gpt-4o-mini", "total_tokens": 1234 });
    let report =
        AnalysisReport::from_payload(CompanySymbol::from("IPL"), &json!("text"), Some(metadata));
    assert_eq!(
        report.metadata_summary().as_deref(),
        Some("Model: gpt-4o-mini • Total Tokens: 1234")
    );
}

#[test]
fn metadata_summary_skips_nested_values_and_empty_metadata() {
    let metadata = json!({ "usage": { "prompt": 900 }, "providers": ["tavily"] });
    let report = AnalysisReport::from_payload(
        CompanySymbol::from("IPL"),
        &json!("text"),
        Some(metadata),
    );
    assert_eq!(report.metadata_summary(), None);

    let no_meta = AnalysisReport::from_payload(CompanySymbol::from("IPL"), &json!("text"), None);
    assert_eq!(no_meta.metadata_summary(), None);
}
