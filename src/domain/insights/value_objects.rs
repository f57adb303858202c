use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use super::services::humanize_key;

/// Value Object - one titled or untitled block of report text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    pub content: String,
}

impl Section {
    pub fn titled(title: impl Into<String>, content: String) -> Self {
        Self { title: Some(title.into()), content }
    }

    pub fn untitled(content: String) -> Self {
        Self { title: None, content }
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}

/// Value Object - company ticker as understood by the analysis backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "CompanySymbol({})", _0)]
pub struct CompanySymbol(String);

impl CompanySymbol {
    pub fn new(raw: String) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("Company symbol cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CompanySymbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - built-in analyst personas the backend ships prompts for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum AnalystPersona {
    #[strum(serialize = "aswath-damodaran")]
    #[serde(rename = "aswath-damodaran")]
    AswathDamodaran,

    #[strum(serialize = "warren-buffet")]
    #[serde(rename = "warren-buffet")]
    WarrenBuffet,
}

impl AnalystPersona {
    /// Wire name expected by the backend's `prompt_name` field.
    pub fn prompt_name(&self) -> &str {
        self.as_ref()
    }

    /// Human-readable label for the persona picker.
    pub fn label(&self) -> String {
        humanize_key(self.prompt_name())
    }
}

impl Default for AnalystPersona {
    fn default() -> Self {
        Self::AswathDamodaran
    }
}

/// Personas available before the live catalog has been fetched.
pub fn default_personas() -> Vec<AnalystPersona> {
    AnalystPersona::iter().collect()
}
