//! Mobile navigation toggle.
//!
//! The hamburger flips the menu; any click outside both the hamburger and
//! the link list closes it. Smooth scroll closes it through
//! [`MenuHandle::navigate`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use showreel_core::scroll;
use showreel_core::{ClickTarget, MobileMenu};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

use crate::context::{set_class, PageContext};

pub const TOGGLE_ID: &str = "navToggle";
pub const LINKS_SELECTOR: &str = ".nav-links";

/// Query/command access to the menu for other controllers.
#[derive(Clone)]
pub struct MenuHandle {
    state: Rc<RefCell<MobileMenu>>,
    toggle: Element,
    links: Element,
}

impl MenuHandle {
    pub fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        self.render(open);
    }

    /// Resolve an anchor click against the menu; see [`scroll::navigate`].
    pub fn navigate(
        &self,
        href: &str,
        header_height: f64,
        section_top: impl FnOnce(&str) -> Option<f64>,
    ) -> Option<f64> {
        let (top, closed) = {
            let mut menu = self.state.borrow_mut();
            let was_open = menu.is_open();
            let top = scroll::navigate(href, &mut menu, header_height, section_top);
            (top, was_open && !menu.is_open())
        };
        if closed {
            self.render(false);
        }
        top
    }

    fn document_click(&self, target: Option<&Node>) {
        let target = match target {
            Some(node) if self.toggle.contains(Some(node)) => ClickTarget::Toggle,
            Some(node) if self.links.contains(Some(node)) => ClickTarget::Menu,
            _ => ClickTarget::Outside,
        };
        if self.state.borrow_mut().document_click(target) {
            self.render(false);
        }
    }

    fn render(&self, open: bool) {
        set_class(&self.toggle, "active", open);
        set_class(&self.links, "active", open);
    }
}

/// The mounted mobile menu.
pub struct MobileNav {
    handle: MenuHandle,
    _listeners: Vec<EventListener>,
}

impl MobileNav {
    pub fn mount(ctx: &PageContext) -> Option<Self> {
        let toggle: Element = ctx.by_id(TOGGLE_ID)?;
        let links = ctx.query(LINKS_SELECTOR)?;

        let handle = MenuHandle {
            state: Rc::new(RefCell::new(MobileMenu::new())),
            toggle: toggle.clone(),
            links,
        };

        let on_toggle = {
            let handle = handle.clone();
            EventListener::new(&toggle, "click", move |_| handle.toggle())
        };

        let on_document = {
            let handle = handle.clone();
            EventListener::new(&ctx.document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                handle.document_click(target.as_ref());
            })
        };

        Some(Self {
            handle,
            _listeners: vec![on_toggle, on_document],
        })
    }

    pub fn handle(&self) -> MenuHandle {
        self.handle.clone()
    }
}
