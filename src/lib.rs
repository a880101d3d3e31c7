//! Showreel
//!
//! Browser behavior for a single-page video portfolio, compiled to
//! WebAssembly. The page markup and styles are supplied by the host; this
//! crate finds the elements it knows about and brings them to life:
//!
//! - navbar scroll state, mobile menu and smooth in-page navigation
//! - scroll reveal with staggered grids and active section highlight
//! - the parallax hero video that docks into the editor preview
//! - the per-card video gallery modal
//! - ambient touches: floating elements, glow parallax, preloader and an
//!   optional cursor trail
//!
//! Behavior that does not need a browser lives in `showreel_core`.

pub mod app;
pub mod components;
pub mod context;
pub mod logging;
pub mod scheduler;

use showreel_core::ShowreelConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::context::{read_config_block, PageContext};

const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;
const DEFAULT_TYPEWRITER_SPEED_MS: u32 = 50;

/// Build the page context from the live window, reading the configuration
/// block if present.
fn page_context() -> Result<(PageContext, Option<showreel_core::ShowreelError>), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let block = read_config_block(&document);
    let (config, error) = ShowreelConfig::from_page_block(block.as_deref());
    Ok((PageContext::new(window, document, config), error))
}

fn current_or_new_context() -> Result<PageContext, JsValue> {
    match app::current_context() {
        Some(ctx) => Ok(ctx),
        None => page_context().map(|(ctx, _)| ctx),
    }
}

/// Entry point: install logging, then wire the page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let (ctx, config_error) = page_context()?;
    logging::init(&ctx.config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "ignoring configuration block, using defaults");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "showreel starting");

    app::hide_preloader_on_load(&ctx);
    app::mount_active_nav(&ctx);
    app::boot_when_ready(ctx);
    Ok(())
}

/// Count an element's text up from zero to `target`.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(
    element: HtmlElement,
    target: f64,
    duration_ms: Option<f64>,
) -> Result<(), JsValue> {
    let ctx = current_or_new_context()?;
    components::text_effects::animate_counter(
        &ctx.window,
        element,
        target,
        duration_ms.unwrap_or(DEFAULT_COUNTER_DURATION_MS),
        ctx.config.counter_frame_ms,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Type `text` into an element one character at a time.
#[wasm_bindgen(js_name = typeWriter)]
pub fn type_writer(element: HtmlElement, text: &str, speed_ms: Option<u32>) {
    components::text_effects::type_writer(
        element,
        text,
        speed_ms.unwrap_or(DEFAULT_TYPEWRITER_SPEED_MS),
    );
}

/// Start the cursor trail if it is not already running.
#[wasm_bindgen(js_name = initCursorTrail)]
pub fn init_cursor_trail() -> Result<(), JsValue> {
    let ctx = current_or_new_context()?;
    app::start_cursor_trail(&ctx);
    Ok(())
}
