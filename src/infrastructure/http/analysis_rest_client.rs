use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::{AnalyzeRequest, HealthStatus, PromptCatalog, extract_analysis};
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::config::ApiConfig;

/// REST client for the fundamental-analysis API
#[derive(Clone)]
pub struct AnalysisApiClient {
    config: ApiConfig,
}

impl Default for AnalysisApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisApiClient {
    pub fn new() -> Self {
        Self { config: ApiConfig::default() }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn analyze_url(&self) -> String {
        self.endpoint("analyze")
    }

    pub fn prompts_url(&self) -> String {
        self.endpoint("prompts")
    }

    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }

    /// POST an analysis request, giving up after the configured timeout.
    ///
    /// Returns the payload for the formatter plus optional response
    /// metadata. Timing out only stops waiting for the response; the
    /// server-side run is not cancelled.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> NetworkResult<(Value, Option<Value>)> {
        let url = self.analyze_url();
        get_logger().info(
            LogComponent::Infrastructure("AnalysisAPI"),
            &format!("📡 POST {} (company: {})", url, request.company),
        );

        let body = serde_json::to_string(request)
            .map_err(|e| AppError::NetworkError(format!("Failed to serialize request: {e}")))?;

        let response = Self::with_timeout(post_json(url, body), self.config.analyze_timeout_ms).await;

        match response {
            Ok(value) => {
                get_logger().info(
                    LogComponent::Infrastructure("AnalysisAPI"),
                    "✅ Analysis response received",
                );
                Ok(extract_analysis(value))
            }
            Err(error) => {
                get_logger().error(
                    LogComponent::Infrastructure("AnalysisAPI"),
                    &format!("❌ Analysis request failed: {error}"),
                );
                Err(error)
            }
        }
    }

    /// Fetch the live persona catalog from `GET /prompts`.
    pub async fn fetch_prompts(&self) -> NetworkResult<PromptCatalog> {
        let url = self.prompts_url();
        get_logger().debug(LogComponent::Infrastructure("AnalysisAPI"), &format!("🌐 GET {url}"));
        Self::with_timeout(get_json::<PromptCatalog>(url), self.config.request_timeout_ms).await
    }

    /// Readiness probe against `GET /health`.
    pub async fn health_check(&self) -> bool {
        let url = self.health_url();
        match Self::with_timeout(get_json::<HealthStatus>(url), self.config.request_timeout_ms).await
        {
            Ok(health) if health.is_ok() => {
                get_logger().info(LogComponent::Infrastructure("AnalysisAPI"), "✅ Backend is up");
                true
            }
            Ok(health) => {
                get_logger().warn(
                    LogComponent::Infrastructure("AnalysisAPI"),
                    &format!("⚠️ Backend reported status: {}", health.status),
                );
                false
            }
            Err(error) => {
                get_logger().warn(
                    LogComponent::Infrastructure("AnalysisAPI"),
                    &format!("❌ Health check failed: {error}"),
                );
                false
            }
        }
    }

    /// Race a request against the clock. Losing the race drops the fetch
    /// future, which stops waiting without cancelling the server.
    async fn with_timeout<T>(
        request: impl std::future::Future<Output = NetworkResult<T>>,
        after_ms: u32,
    ) -> NetworkResult<T> {
        let timeout = TimeoutFuture::new(after_ms);
        pin_mut!(request);
        pin_mut!(timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AppError::TimeoutError { after_ms }),
        }
    }
}

async fn post_json(url: String, body: String) -> NetworkResult<Value> {
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| AppError::NetworkError(format!("Failed to build request: {e:?}")))?
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Request failed: {e:?}")))?;

    if !response.ok() {
        return Err(AppError::ApiError {
            status: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to parse JSON: {e:?}")))
}

async fn get_json<T: DeserializeOwned>(url: String) -> NetworkResult<T> {
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Request failed: {e:?}")))?;

    if !response.ok() {
        return Err(AppError::ApiError {
            status: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to parse JSON: {e:?}")))
}
