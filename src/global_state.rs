use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

use crate::domain::insights::{AnalystPersona, Section, default_personas};

/// Reactive application state shared across components and use cases.
pub struct Globals {
    pub company_input: RwSignal<String>,
    pub selected_persona: RwSignal<String>,
    pub persona_catalog: RwSignal<Vec<String>>,
    pub report_sections: RwSignal<Vec<Section>>,
    pub report_metadata: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub status_line: RwSignal<String>,
    pub last_error: RwSignal<Option<String>>,
    pub inflight_abort_handle: RwSignal<Option<AbortHandle>>,
    pub backend_online: RwSignal<Option<bool>>,
    pub log_lines: RwSignal<Vec<String>>,
    pub logs_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        company_input: create_rw_signal(String::new()),
        selected_persona: create_rw_signal(AnalystPersona::default().prompt_name().to_string()),
        persona_catalog: create_rw_signal(
            default_personas().iter().map(|persona| persona.prompt_name().to_string()).collect(),
        ),
        report_sections: create_rw_signal(Vec::new()),
        report_metadata: create_rw_signal(None),
        is_loading: create_rw_signal(false),
        status_line: create_rw_signal("Enter a company symbol to begin".to_string()),
        last_error: create_rw_signal(None),
        inflight_abort_handle: create_rw_signal(None),
        backend_online: create_rw_signal(None),
        log_lines: create_rw_signal(Vec::new()),
        logs_paused: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub company_input => company_input: String,
    pub selected_persona => selected_persona: String,
    pub persona_catalog => persona_catalog: Vec<String>,
    pub report_sections => report_sections: Vec<Section>,
    pub report_metadata => report_metadata: Option<String>,
    pub is_loading => is_loading: bool,
    pub status_line => status_line: String,
    pub last_error => last_error: Option<String>,
    pub inflight_abort_handle => inflight_abort_handle: Option<AbortHandle>,
    pub backend_online => backend_online: Option<bool>,
    pub log_lines => log_lines: Vec<String>,
    pub logs_paused => logs_paused: bool,
}
