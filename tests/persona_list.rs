use std::str::FromStr;

use insight_view_wasm::domain::insights::{AnalystPersona, default_personas};

#[test]
fn ships_two_built_in_personas() {
    let personas = default_personas();
    assert_eq!(personas.len(), 2);
    assert!(personas.contains(&AnalystPersona::AswathDamodaran));
    assert!(personas.contains(&AnalystPersona::WarrenBuffet));
}

#[test]
fn damodaran_is_the_default() {
    assert_eq!(AnalystPersona::default().prompt_name(), "aswath-damodaran");
}

#[test]
fn labels_are_humanized_wire_names() {
    assert_eq!(AnalystPersona::WarrenBuffet.label(), "Warren Buffet");
    assert_eq!(AnalystPersona::AswathDamodaran.label(), "Aswath Damodaran");
}

#[test]
fn wire_names_round_trip() {
    let persona = AnalystPersona::from_str("warren-buffet").unwrap();
    assert_eq!(persona, AnalystPersona::WarrenBuffet);
    assert_eq!(persona.to_string(), "warren-buffet");
    assert!(AnalystPersona::from_str("peter-lynch").is_err());
}
