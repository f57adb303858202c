use serde_json::Value;

use super::value_objects::Section;

/// Turn a wire key like `net_income` or `pe-ratio` into a display label.
///
/// Underscores and hyphens become spaces, and the first letter of every
/// word is capitalized. The rest of each word is left untouched, so
/// acronyms like `EPS` survive (`ttm_EPS` -> `Ttm EPS`).
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' || ch == '-' { ' ' } else { ch };
        if ch.is_ascii_alphanumeric() {
            if at_word_start {
                label.push(ch.to_ascii_uppercase());
            } else {
                label.push(ch);
            }
            at_word_start = false;
        } else {
            label.push(ch);
            at_word_start = true;
        }
    }
    label
}

/// Render an arbitrary JSON value as flat display text.
///
/// Total over every `Value`: nulls and empty containers come back as the
/// empty string, arrays become `•` bullet lines, objects become
/// `Label: value` lines joined with newlines. Nested multi-line results are
/// inlined after the bullet as-is, without re-indentation.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let rendered = stringify_value(item);
                if rendered.is_empty() {
                    // Placeholder for elements with no printable content,
                    // including legitimately empty nested containers.
                    format!("• Item {}", index + 1)
                } else {
                    format!("• {rendered}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{}: {}", humanize_key(key), stringify_value(value)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Split an analysis payload into renderable sections.
///
/// Strings are split into untitled paragraph sections, arrays get
/// sequential `Insight N` titles, objects one section per entry in source
/// order. Falsy payloads (null, empty string, zero, false) produce no
/// sections at all. Never fails, whatever the backend sends.
pub fn payload_to_sections(payload: &Value) -> Vec<Section> {
    if is_falsy(payload) {
        return Vec::new();
    }
    match payload {
        Value::String(text) => text
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(|block| Section::untitled(block.to_string()))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Section::titled(format!("Insight {}", index + 1), stringify_value(item))
            })
            .collect(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| Section::titled(humanize_key(key), stringify_value(value)))
            .collect(),
        other => vec![Section::untitled(stringify_value(other))],
    }
}

/// JS-style falsiness over JSON values. NaN and infinities are not
/// representable in `serde_json`, so zero is the only falsy number.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
