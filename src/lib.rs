use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;

/// Wire up logging and mount the single-page client.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(time_provider);

    let logger = Box::new(app::LeptosLogger::new());
    domain::logging::init_logger(logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Fundamental analysis client ready",
    );

    leptos::mount_to_body(app::App);
}
