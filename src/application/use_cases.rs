use futures::future::{AbortRegistration, Abortable, Aborted};
use leptos::*;

use crate::domain::errors::AppError;
use crate::domain::insights::{AnalysisReport, CompanySymbol};
use crate::domain::logging::LogComponent;
use crate::{log_error, log_info, log_warn};
use crate::global_state::{
    backend_online, inflight_abort_handle, is_loading, last_error, persona_catalog,
    report_metadata, report_sections, selected_persona, status_line,
};
use crate::infrastructure::http::AnalysisApiClient;
use crate::infrastructure::http::dto::AnalyzeRequest;

/// Run one analysis round-trip and publish the outcome to the global
/// signals. An aborted run returns silently - the submission that aborted
/// it owns the signals from that point on.
pub async fn run_analysis(
    company: CompanySymbol,
    prompt_name: String,
    abort_registration: AbortRegistration,
) {
    is_loading().set(true);
    last_error().set(None);
    report_sections().set(Vec::new());
    report_metadata().set(None);
    status_line().set(format!("📡 Analyzing {}...", company.value()));

    let client = AnalysisApiClient::new();
    let request = AnalyzeRequest::for_company(&company, &prompt_name);
    let outcome = Abortable::new(client.analyze(&request), abort_registration).await;

    match outcome {
        Err(Aborted) => {
            log_info!(
                LogComponent::Application("RunAnalysis"),
                "🛑 Analysis of {} superseded by a newer request",
                company.value()
            );
        }
        Ok(Ok((payload, metadata))) => {
            let report = AnalysisReport::from_payload(company.clone(), &payload, metadata);
            if report.is_empty() {
                status_line().set(format!("⚠️ The analysis of {} came back empty", company.value()));
            } else {
                status_line().set(format!(
                    "✅ {} insight sections for {}",
                    report.section_count(),
                    company.value()
                ));
            }
            report_metadata().set(report.metadata_summary());
            report_sections().set(report.sections);
            is_loading().set(false);
            inflight_abort_handle().set_untracked(None);
        }
        Ok(Err(error)) => {
            let message = match &error {
                AppError::TimeoutError { after_ms } => format!(
                    "The analysis timed out after {}s. The backend may still be working; try again in a moment.",
                    after_ms / 1000
                ),
                other => other.to_string(),
            };
            log_error!(
                LogComponent::Application("RunAnalysis"),
                "❌ Analysis of {} failed: {error}",
                company.value()
            );
            last_error().set(Some(message));
            status_line().set("❌ Analysis failed".to_string());
            is_loading().set(false);
            inflight_abort_handle().set_untracked(None);
        }
    }
}

/// Refresh the persona picker from `GET /prompts`. The built-in personas
/// stay in place when the backend is unreachable.
pub async fn load_persona_catalog() {
    let client = AnalysisApiClient::new();
    match client.fetch_prompts().await {
        Ok(catalog) => {
            log_info!(
                LogComponent::Application("PersonaCatalog"),
                "✅ {} analyst personas available",
                catalog.prompts.len()
            );
            if catalog.contains(&catalog.default_prompt) {
                selected_persona().set(catalog.default_prompt.clone());
            }
            if !catalog.prompts.is_empty() {
                persona_catalog().set(catalog.prompts);
            }
        }
        Err(error) => {
            log_warn!(
                LogComponent::Application("PersonaCatalog"),
                "⚠️ Could not fetch persona catalog: {error}"
            );
        }
    }
}

/// Probe the backend once and publish the result for the header chip.
pub async fn check_backend() {
    let client = AnalysisApiClient::new();
    let online = client.health_check().await;
    backend_online().set(Some(online));
}
