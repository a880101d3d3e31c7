//! Navbar scrolled state.

use std::cell::RefCell;
use std::rc::Rc;

use showreel_core::NavbarState;
use web_sys::Element;

use crate::context::{set_class, PageContext};
use crate::scheduler::ScrollScheduler;

pub const NAVBAR_ID: &str = "navbar";

/// Adds `scrolled` to `#navbar` once the page moves past the threshold.
pub struct Navbar {
    state: Rc<RefCell<NavbarState>>,
}

impl Navbar {
    pub fn mount(ctx: &PageContext, scheduler: &ScrollScheduler) -> Option<Self> {
        let navbar: Element = ctx.by_id(NAVBAR_ID)?;
        let state = Rc::new(RefCell::new(NavbarState::new(ctx.config.navbar_threshold)));

        let tracked = Rc::clone(&state);
        scheduler.subscribe(move |scroll_y| {
            if let Some(scrolled) = tracked.borrow_mut().update(scroll_y) {
                set_class(&navbar, "scrolled", scrolled);
            }
        });

        Some(Self { state })
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.borrow().is_scrolled()
    }
}
