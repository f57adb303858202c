pub use super::value_objects::{CompanySymbol, Section};
use serde_json::Value;

use super::services::{humanize_key, payload_to_sections, stringify_value};

/// Domain entity - one completed analysis run for a company
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub company: CompanySymbol,
    pub sections: Vec<Section>,
    pub metadata: Option<Value>,
}

impl AnalysisReport {
    pub fn new(company: CompanySymbol, sections: Vec<Section>, metadata: Option<Value>) -> Self {
        Self { company, sections, metadata }
    }

    /// Build a report straight from the payload the backend returned.
    pub fn from_payload(company: CompanySymbol, payload: &Value, metadata: Option<Value>) -> Self {
        Self::new(company, payload_to_sections(payload), metadata)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// One-line summary of response metadata (model, token usage) when the
    /// backend sent any, rendered with the same key labels as the report.
    pub fn metadata_summary(&self) -> Option<String> {
        let metadata = self.metadata.as_ref()?;
        let fields = metadata.as_object()?;
        if fields.is_empty() {
            return None;
        }
        let summary = fields
            .iter()
            .filter(|(_, value)| !value.is_object() && !value.is_array())
            .map(|(key, value)| format!("{}: {}", humanize_key(key), stringify_value(value)))
            .collect::<Vec<_>>()
            .join(" • ");
        if summary.is_empty() { None } else { Some(summary) }
    }
}
