use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::insights::CompanySymbol;

/// Backend defaults for how much financial history one request covers.
pub const DEFAULT_MAX_YEARS: u32 = 5;
pub const DEFAULT_MAX_QUARTERS: u32 = 8;

/// DTO - body for `POST /analyze`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub company: String,
    pub prompt_name: String,
    pub max_years: u32,
    pub max_quarters: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_search: Option<bool>,
}

impl AnalyzeRequest {
    pub fn for_company(company: &CompanySymbol, prompt_name: &str) -> Self {
        Self {
            company: company.value().to_string(),
            prompt_name: prompt_name.to_string(),
            max_years: DEFAULT_MAX_YEARS,
            max_quarters: DEFAULT_MAX_QUARTERS,
            model: None,
            enable_search: None,
        }
    }
}

/// Split a response body into the payload the formatter consumes plus any
/// response metadata. Object bodies expose their `analysis` sub-field when
/// present and non-null; every other body shape is handed over whole - the
/// formatter copes with anything.
pub fn extract_analysis(body: Value) -> (Value, Option<Value>) {
    match body {
        Value::Object(fields) => {
            let metadata = fields.get("metadata").filter(|meta| !meta.is_null()).cloned();
            let analysis = fields.get("analysis").filter(|payload| !payload.is_null()).cloned();
            (analysis.unwrap_or(Value::Object(fields)), metadata)
        }
        other => (other, None),
    }
}

/// DTO - response of `GET /prompts`
#[derive(Debug, Clone, Deserialize)]
pub struct PromptCatalog {
    pub prompts: Vec<String>,
    #[serde(rename = "default")]
    pub default_prompt: String,
}

impl PromptCatalog {
    pub fn contains(&self, prompt_name: &str) -> bool {
        self.prompts.iter().any(|name| name == prompt_name)
    }
}

/// DTO - response of `GET /health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
