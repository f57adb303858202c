use futures::future::AbortHandle;
use leptos::*;

use crate::application::{check_backend, load_persona_catalog, run_analysis};
use crate::domain::errors::AppError;
use crate::domain::insights::{CompanySymbol, Section, humanize_key};
use crate::domain::logging::{LogComponent, LogEntry, Logger, get_logger};
use crate::global_state::{
    backend_online, company_input, inflight_abort_handle, is_loading, last_error, log_lines,
    logs_paused, persona_catalog, report_metadata, report_sections, selected_persona, status_line,
};
use crate::infrastructure::markdown::render_markdown;
use crate::infrastructure::services::ConsoleLogger;

/// 🌉 Bridge logger: mirrors every entry into the on-page debug console
/// while still writing to the browser console.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = ConsoleLogger::format_entry(&entry);
        if !logs_paused().get_untracked() {
            log_lines().update(|lines| {
                lines.push(formatted);
                // Keep the console bounded
                while lines.len() > 100 {
                    lines.remove(0);
                }
            });
        }
        self.console.log(entry);
    }
}

/// Validate the form input and kick off an analysis run. A still-running
/// request is aborted first - the newest submission wins.
fn submit_analysis() {
    match CompanySymbol::new(company_input().get_untracked()) {
        Err(reason) => {
            last_error().set(Some(AppError::ValidationError(reason).to_string()));
            status_line().set("❌ Enter a company symbol first".to_string());
        }
        Ok(company) => {
            last_error().set(None);
            if let Some(handle) = inflight_abort_handle().get_untracked() {
                handle.abort();
            }
            let (handle, registration) = AbortHandle::new_pair();
            inflight_abort_handle().set(Some(handle));
            let persona = selected_persona().get_untracked();
            spawn_local(run_analysis(company, persona, registration));
        }
    }
}

/// 🦀 Root component of the analysis client
#[component]
pub fn App() -> impl IntoView {
    // One-shot startup work: persona catalog + backend probe
    create_effect(move |_| {
        spawn_local(load_persona_catalog());
        spawn_local(check_backend());
    });

    view! {
        <style>
            {r#"
            .analysis-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(160deg, #0f2027 0%, #203a43 50%, #2c5364 100%);
                min-height: 100vh;
                padding: 20px;
                color: #eef2f5;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.08);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.15);
            }

            .status-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .status-item {
                text-align: center;
            }

            .status-value {
                font-size: 20px;
                font-weight: 700;
                color: #7fd1ae;
            }

            .status-label {
                font-size: 12px;
                color: #9fb2bd;
                margin-top: 5px;
            }

            .analysis-form {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                gap: 10px;
                margin-bottom: 20px;
            }

            .company-input {
                background: rgba(0, 0, 0, 0.35);
                color: #eef2f5;
                border: 1px solid #3e5a6d;
                border-radius: 8px;
                padding: 10px 14px;
                font-size: 15px;
                min-width: 260px;
            }

            .persona-select {
                background: rgba(0, 0, 0, 0.35);
                color: #eef2f5;
                border: 1px solid #3e5a6d;
                border-radius: 8px;
                padding: 10px 14px;
                font-size: 14px;
            }

            .analyze-btn {
                background: #2e8b6d;
                color: white;
                border: none;
                padding: 10px 22px;
                border-radius: 8px;
                cursor: pointer;
                font-size: 15px;
                font-weight: 600;
            }

            .analyze-btn:disabled {
                background: #3e5a6d;
                cursor: wait;
            }

            .error-banner {
                width: 100%;
                text-align: center;
                color: #ff9d9d;
                font-size: 14px;
            }

            .status {
                width: 100%;
                color: #7fd1ae;
                font-size: 14px;
                text-align: center;
            }

            .report {
                max-width: 860px;
                margin: 0 auto 20px auto;
            }

            .report-section {
                background: rgba(0, 0, 0, 0.35);
                border: 1px solid #3e5a6d;
                border-radius: 10px;
                padding: 16px 20px;
                margin-bottom: 12px;
            }

            .section-title {
                margin: 0 0 8px 0;
                color: #7fd1ae;
                font-size: 16px;
            }

            .section-content {
                font-size: 14px;
                line-height: 1.5;
                white-space: pre-line;
            }

            .report-meta {
                text-align: center;
                color: #9fb2bd;
                font-size: 12px;
                margin-top: 8px;
            }

            .report-empty {
                text-align: center;
                color: #9fb2bd;
                font-size: 14px;
                padding: 30px 0;
            }

            .debug-console {
                max-width: 860px;
                margin: 0 auto;
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #3e5a6d;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #7fd1ae;
                font-weight: bold;
            }

            .debug-btn {
                background: #3e5a6d;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-btn:hover {
                background: #4e6a7d;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }
            "#}
        </style>
        <div class="analysis-app">
            <Header />
            <AnalysisForm />
            <ReportView />
            <DebugConsole />
        </div>
    }
}

/// 📊 Header with live backend/report status
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>"📊 Fundamental Analysis"</h1>
            <p>"Company fundamentals • AI analyst personas • Leptos + WASM"</p>

            <div class="status-info">
                <div class="status-item">
                    <div class="status-value">
                        {move || match backend_online().get() {
                            Some(true) => "🟢 ONLINE",
                            Some(false) => "🔴 OFFLINE",
                            None => "⏳ CHECKING",
                        }}
                    </div>
                    <div class="status-label">"Backend"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || report_sections().get().len().to_string()}
                    </div>
                    <div class="status-label">"Sections"</div>
                </div>
                <div class="status-item">
                    <div class="status-value">
                        {move || humanize_key(&selected_persona().get())}
                    </div>
                    <div class="status-label">"Persona"</div>
                </div>
            </div>
        </div>
    }
}

/// 📝 Company input + persona picker + submit
#[component]
fn AnalysisForm() -> impl IntoView {
    view! {
        <div class="analysis-form">
            <input
                class="company-input"
                type="text"
                placeholder="Company symbol, e.g. IPL"
                prop:value=move || company_input().get()
                on:input=move |ev| company_input().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit_analysis();
                    }
                }
            />
            <select
                class="persona-select"
                on:change=move |ev| selected_persona().set(event_target_value(&ev))
            >
                <For
                    each=move || persona_catalog().get()
                    key=|name| name.clone()
                    children=move |name: String| {
                        let value = name.clone();
                        let this_name = name.clone();
                        let label = humanize_key(&name);
                        view! {
                            <option
                                value=value
                                selected=move || selected_persona().get() == this_name
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <button
                class="analyze-btn"
                disabled=move || is_loading().get()
                on:click=move |_| submit_analysis()
            >
                {move || if is_loading().get() { "⏳ Analyzing..." } else { "🔍 Analyze" }}
            </button>
            {move || last_error().get().map(|error| view! { <div class="error-banner">{error}</div> })}
            <div class="status">{move || status_line().get()}</div>
        </div>
    }
}

/// 📄 The formatted analysis report
#[component]
fn ReportView() -> impl IntoView {
    view! {
        <div class="report">
            {move || {
                report_sections().get().is_empty().then(|| {
                    view! {
                        <div class="report-empty">
                            "No analysis yet. Pick a company and hit Analyze."
                        </div>
                    }
                })
            }}
            <For
                each=move || {
                    let sections: Vec<(usize, Section)> =
                        report_sections().get().into_iter().enumerate().collect();
                    sections
                }
                key=|(index, section)| (*index, section.content.clone())
                children=move |(_, section): (usize, Section)| {
                    let title = section.title.clone().map(|title| {
                        view! { <h3 class="section-title">{title}</h3> }
                    });
                    let content = render_markdown(&section.content);
                    view! {
                        <div class="report-section">
                            {title}
                            <div class="section-content" inner_html=content></div>
                        </div>
                    }
                }
            />
            {move || report_metadata().get().map(|meta| view! { <div class="report-meta">{meta}</div> })}
        </div>
    }
}

/// 🐛 On-page console fed by the logging bridge
#[component]
fn DebugConsole() -> impl IntoView {
    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Client Log"</span>
                <span>
                    <button
                        on:click=move |_| {
                            logs_paused().update(|paused| *paused = !*paused);
                            if logs_paused().get_untracked() {
                                get_logger().info(
                                    LogComponent::Presentation("DebugConsole"),
                                    "🛑 Logging paused",
                                );
                            } else {
                                get_logger().info(
                                    LogComponent::Presentation("DebugConsole"),
                                    "▶️ Logging resumed",
                                );
                            }
                        }
                        class="debug-btn"
                    >
                        {move || if logs_paused().get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        on:click=move |_| {
                            log_lines().set(Vec::new());
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🗑️ Log history cleared",
                            );
                        }
                        class="debug-btn"
                    >
                        "🗑️ Clear"
                    </button>
                </span>
            </div>
            <div class="debug-log">
                <For
                    each=move || log_lines().get()
                    key=|line| line.clone()
                    children=move |line| {
                        view! { <div class="log-line">{line}</div> }
                    }
                />
            </div>
        </div>
    }
}
