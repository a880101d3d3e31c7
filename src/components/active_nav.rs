//! Active section highlight in the navigation.

use gloo::events::EventListener;
use showreel_core::active_nav::{active_section, is_active_link, SectionBounds};
use web_sys::{Element, HtmlElement};

use crate::context::{set_class, PageContext};
use crate::scheduler::ScrollScheduler;

pub const SECTION_SELECTOR: &str = "section[id]";
pub const LINK_SELECTOR: &str = ".nav-links a";

fn bounds(sections: &[HtmlElement]) -> Vec<SectionBounds> {
    sections
        .iter()
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

fn highlight(links: &[Element], active: Option<&str>) {
    for link in links {
        let href = link.get_attribute("href");
        set_class(link, "active", is_active_link(href.as_deref(), active));
    }
}

/// The mounted highlight. Runs on its own scroll scheduler so it does not
/// wait for the rest of the page controllers.
pub struct ActiveNav {
    scheduler: ScrollScheduler,
    _scroll: EventListener,
}

impl ActiveNav {
    /// Returns `None` when the page has no sections or no nav links.
    pub fn mount(ctx: &PageContext) -> Option<Self> {
        let sections = ctx.query_all_html(SECTION_SELECTOR);
        let links = ctx.query_all(LINK_SELECTOR);
        if sections.is_empty() || links.is_empty() {
            tracing::debug!("active section highlight disabled");
            return None;
        }

        let scheduler = ScrollScheduler::new(ctx.window.clone());
        let offset = ctx.config.active_nav_offset;
        scheduler.subscribe(move |scroll_y| {
            // Section geometry moves with layout, so it is read every frame.
            let bounds = bounds(&sections);
            highlight(&links, active_section(&bounds, scroll_y, offset));
        });
        let scroll = scheduler.listen();

        Some(Self {
            scheduler,
            _scroll: scroll,
        })
    }

    pub fn is_listening(&self) -> bool {
        self.scheduler.subscriber_count() > 0
    }
}
