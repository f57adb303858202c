use insight_view_wasm::domain::insights::{payload_to_sections, stringify_value};
use quickcheck::{Arbitrary, Gen, QuickCheck};
use serde_json::{Map, Value};

/// Random JSON-like payloads nested up to ten levels deep, covering every
/// variant the formatter can meet on the wire, including empty containers.
#[derive(Clone, Debug)]
struct NestedPayload(Value);

impl Arbitrary for NestedPayload {
    fn arbitrary(g: &mut Gen) -> Self {
        NestedPayload(arbitrary_value(g, 10))
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let variants = if depth == 0 { 4 } else { 6 };
    match u8::arbitrary(g) % variants {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::from(i64::arbitrary(g)),
        3 => Value::String(String::arbitrary(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut fields = Map::new();
            for _ in 0..len {
                fields.insert(String::arbitrary(g), arbitrary_value(g, depth - 1));
            }
            Value::Object(fields)
        }
    }
}

#[test]
fn transform_is_total_and_idempotent() {
    fn prop(payload: NestedPayload) -> bool {
        // Reaching the comparisons at all proves totality - nothing panics.
        let sections_first = payload_to_sections(&payload.0);
        let sections_second = payload_to_sections(&payload.0);
        let text_first = stringify_value(&payload.0);
        let text_second = stringify_value(&payload.0);
        sections_first == sections_second && text_first == text_second
    }
    QuickCheck::new().tests(1000).quickcheck(prop as fn(NestedPayload) -> bool);
}

#[test]
fn array_payloads_always_get_sequential_titles() {
    fn prop(payload: NestedPayload) -> bool {
        match &payload.0 {
            Value::Array(items) => {
                let sections = payload_to_sections(&payload.0);
                if items.is_empty() {
                    return sections.is_empty();
                }
                sections.len() == items.len()
                    && sections.iter().enumerate().all(|(index, section)| {
                        section.title.as_deref() == Some(format!("Insight {}", index + 1).as_str())
                    })
            }
            _ => true,
        }
    }
    QuickCheck::new().tests(1000).quickcheck(prop as fn(NestedPayload) -> bool);
}

#[test]
fn string_sections_are_trimmed_and_non_empty() {
    fn prop(payload: NestedPayload) -> bool {
        match &payload.0 {
            Value::String(_) => payload_to_sections(&payload.0)
                .iter()
                .all(|section| !section.content.is_empty() && section.content.trim() == section.content),
            _ => true,
        }
    }
    QuickCheck::new().tests(1000).quickcheck(prop as fn(NestedPayload) -> bool);
}
