use insight_view_wasm::domain::insights::stringify_value;
use serde_json::{Value, json};

#[test]
fn null_is_empty() {
    assert_eq!(stringify_value(&Value::Null), "");
}

#[test]
fn scalars_use_their_canonical_text() {
    assert_eq!(stringify_value(&json!(42)), "42");
    assert_eq!(stringify_value(&json!(4.5)), "4.5");
    assert_eq!(stringify_value(&json!(true)), "true");
    assert_eq!(stringify_value(&json!("as-is text")), "as-is text");
}

#[test]
fn arrays_become_bullet_lines() {
    assert_eq!(stringify_value(&json!(["a", "b"])), "• a\n• b");
}

#[test]
fn empty_containers_are_empty() {
    assert_eq!(stringify_value(&json!([])), "");
    assert_eq!(stringify_value(&json!({})), "");
}

#[test]
fn objects_become_labelled_lines_in_source_order() {
    let value = json!({ "net_income": 100, "is_profitable": true });
    assert_eq!(stringify_value(&value), "Net Income: 100\nIs Profitable: true");
}

#[test]
fn empty_string_element_gets_placeholder_label() {
    assert_eq!(stringify_value(&json!([""])), "• Item 1");
}

#[test]
fn empty_nested_container_also_gets_placeholder_label() {
    assert_eq!(stringify_value(&json!([[]])), "• Item 1");
    assert_eq!(stringify_value(&json!([{}, "x"])), "• Item 1\n• x");
}

#[test]
fn nested_array_is_inlined_flat_after_the_bullet() {
    // No re-indentation of inner lines, by contract.
    assert_eq!(stringify_value(&json!([["x", "y"]])), "• • x\n• y");
}

#[test]
fn null_object_value_renders_as_bare_label() {
    assert_eq!(stringify_value(&json!({ "next_year": null })), "Next Year: ");
}
