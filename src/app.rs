//! Page lifecycle.
//!
//! [`boot`] mounts every controller once the document is parsed and keeps
//! them alive in a thread-local slot for the life of the page. The
//! preloader, active section highlight and cursor trail live in their own
//! slots so each can come up on its own.

use std::cell::RefCell;

use gloo::events::EventListener;

use crate::components::{
    preloader, ActiveNav, Ambient, CursorTrailEffect, MobileNav, Navbar, ParallaxVideo, Reveal,
    SmoothScroll, VideoGallery,
};
use crate::context::PageContext;
use crate::scheduler::ScrollScheduler;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static TRAIL: RefCell<Option<CursorTrailEffect>> = const { RefCell::new(None) };
    static ACTIVE_NAV: RefCell<Option<ActiveNav>> = const { RefCell::new(None) };
}

/// Every mounted controller.
pub struct App {
    ctx: PageContext,
    scheduler: ScrollScheduler,
    _scroll: EventListener,
    navbar: Option<Navbar>,
    menu: Option<MobileNav>,
    _smooth_scroll: Option<SmoothScroll>,
    reveal: Option<Reveal>,
    parallax: Option<ParallaxVideo>,
    gallery: Option<VideoGallery>,
    _ambient: Ambient,
}

impl App {
    /// Mount the controllers against the parsed document.
    pub fn mount(ctx: PageContext) -> Self {
        let scheduler = ScrollScheduler::new(ctx.window.clone());
        let scroll = scheduler.listen();

        let navbar = Navbar::mount(&ctx, &scheduler);
        let menu = MobileNav::mount(&ctx);
        let smooth_scroll = SmoothScroll::mount(&ctx, menu.as_ref().map(MobileNav::handle));
        let reveal = Reveal::mount(&ctx).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "reveal failed to start");
            None
        });
        let parallax = ParallaxVideo::mount(&ctx, &scheduler);
        let gallery = VideoGallery::mount(&ctx);
        let ambient = Ambient::mount(&ctx, &scheduler);

        let app = Self {
            ctx,
            scheduler,
            _scroll: scroll,
            navbar,
            menu,
            _smooth_scroll: smooth_scroll,
            reveal,
            parallax,
            gallery,
            _ambient: ambient,
        };
        app.log_summary();
        app
    }

    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    fn log_summary(&self) {
        tracing::info!(
            navbar_scrolled = self.navbar.as_ref().map(Navbar::is_scrolled),
            menu = self.menu.is_some(),
            revealed = self.reveal.as_ref().map(Reveal::revealed_count),
            parallax_overlay = self.parallax.as_ref().map(ParallaxVideo::overlay_visible),
            gallery_cards = self.gallery.as_ref().map(VideoGallery::card_count),
            scroll_subscribers = self.scheduler.subscriber_count(),
            "showreel ready"
        );
    }
}

/// `document.readyState` once the markup has been parsed.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// `document.readyState` once the window `load` event has fired.
fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Mount the app now. A second call is ignored.
pub fn boot(ctx: PageContext) {
    let already = APP.with(|slot| slot.borrow().is_some());
    if already {
        tracing::debug!("showreel already booted");
        return;
    }

    let start_trail = ctx.config.cursor_trail;
    let app = App::mount(ctx.clone());
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    if start_trail {
        start_cursor_trail(&ctx);
    }
}

/// Boot once the document is parsed, or right away if it already is.
pub fn boot_when_ready(ctx: PageContext) {
    if is_parsed(&ctx.document.ready_state()) {
        boot(ctx);
        return;
    }
    let document = ctx.document.clone();
    EventListener::once(&document, "DOMContentLoaded", move |_| boot(ctx)).forget();
}

/// Mount the active section highlight on its own, as soon as the script
/// runs. A second call is ignored.
pub fn mount_active_nav(ctx: &PageContext) {
    ACTIVE_NAV.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        *slot = ActiveNav::mount(ctx);
        tracing::debug!(
            listening = slot.as_ref().map(ActiveNav::is_listening),
            "active section highlight"
        );
    });
}

/// Hide the preloader on window `load`, or right away if the page has
/// already finished loading.
pub fn hide_preloader_on_load(ctx: &PageContext) {
    if is_loaded(&ctx.document.ready_state()) {
        preloader::hide(ctx);
        return;
    }
    let page = ctx.clone();
    EventListener::once(&ctx.window, "load", move |_| preloader::hide(&page)).forget();
}

/// Start the cursor trail unless it is already running.
pub fn start_cursor_trail(ctx: &PageContext) {
    TRAIL.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return;
        }
        match CursorTrailEffect::start(ctx) {
            Ok(trail) => *slot = Some(trail),
            Err(e) => tracing::warn!(error = %e, "cursor trail failed to start"),
        }
    });
}

/// The booted app's context, if any.
pub fn current_context() -> Option<PageContext> {
    APP.with(|slot| slot.borrow().as_ref().map(|app| app.context().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_states() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));

        assert!(!is_loaded("loading"));
        assert!(!is_loaded("interactive"));
        assert!(is_loaded("complete"));
    }
}
