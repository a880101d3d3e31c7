//! Preloader fade-out.

use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::context::{set_style, PageContext};

pub const PRELOADER_SELECTOR: &str = ".preloader";

/// Fade the preloader out, then take it out of the layout once the fade
/// has had time to finish.
pub fn hide(ctx: &PageContext) {
    let Some(preloader) = ctx.query_as::<HtmlElement>(PRELOADER_SELECTOR) else {
        return;
    };
    set_style(&preloader, "opacity", "0");
    Timeout::new(ctx.config.preloader_fade_ms, move || {
        set_style(&preloader, "display", "none");
    })
    .forget();
}
