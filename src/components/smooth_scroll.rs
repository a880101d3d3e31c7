//! Smooth in-page anchor navigation.

use gloo::events::{EventListener, EventListenerOptions};
use showreel_core::scroll;
use showreel_core::MobileMenu;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::components::mobile_nav::MenuHandle;
use crate::context::PageContext;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = ".navbar";

/// Intercepts `#fragment` links and scrolls to the section under the header.
pub struct SmoothScroll {
    _listeners: Vec<EventListener>,
}

impl SmoothScroll {
    pub fn mount(ctx: &PageContext, menu: Option<MenuHandle>) -> Option<Self> {
        let anchors = ctx.query_all(ANCHOR_SELECTOR);
        if anchors.is_empty() {
            return None;
        }

        let listeners = anchors
            .into_iter()
            .map(|anchor| {
                let ctx = ctx.clone();
                let menu = menu.clone();
                let target = anchor.clone();
                EventListener::new_with_options(
                    &target,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        navigate(&ctx, &anchor, menu.as_ref());
                    },
                )
            })
            .collect();

        Some(Self {
            _listeners: listeners,
        })
    }
}

fn navigate(ctx: &PageContext, anchor: &Element, menu: Option<&MenuHandle>) {
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };

    let header_height = ctx
        .query_as::<HtmlElement>(HEADER_SELECTOR)
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);
    let section_top =
        |id: &str| ctx.by_id::<HtmlElement>(id).map(|section| section.offset_top() as f64);

    let top = match menu {
        Some(menu) => menu.navigate(&href, header_height, section_top),
        None => scroll::navigate(&href, &mut MobileMenu::new(), header_height, section_top),
    };
    match top {
        Some(top) => scroll_smoothly(&ctx.window, top),
        None => tracing::debug!(href = %href, "anchor has no target"),
    }
}

fn scroll_smoothly(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
