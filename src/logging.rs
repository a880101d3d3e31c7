//! Browser console sink for the core logging layer.

use showreel_core::logging::{env_filter, ConsoleLayer, LogSink};
use showreel_core::ShowreelConfig;
use tracing::Level;
use tracing_subscriber::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes rendered entries to the developer console, picking the console
/// method by level so the browser's own filtering keeps working.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl LogSink for BrowserConsole {
    fn write(&self, level: &Level, line: &str) {
        let line = JsValue::from_str(line);
        match *level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Install the global subscriber. Safe to call twice; the second call is a
/// no-op.
pub fn init(config: &ShowreelConfig) {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(ConsoleLayer::new(BrowserConsole, config.log_format));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        console::debug_1(&JsValue::from_str("showreel: logging already initialised"));
    }
}
