/// Analyze calls sit on an LLM run server-side, so they get a generous
/// budget; catalog and health lookups are plain HTTP.
pub const DEFAULT_ANALYZE_TIMEOUT_MS: u32 = 300_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 20_000;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Endpoint settings for the analysis backend.
///
/// WASM has no process environment, so the base URL is baked in at compile
/// time: set `ANALYSIS_API_URL` when building to point at a deployed
/// backend, otherwise the local dev server is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub analyze_timeout_ms: u32,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("ANALYSIS_API_URL").unwrap_or(DEFAULT_BASE_URL).to_string(),
            analyze_timeout_ms: DEFAULT_ANALYZE_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}
