//! Scroll plumbing shared by the scroll-driven controllers.

use crate::menu::MobileMenu;

/// Coalesces scroll events into at most one pending frame callback.
///
/// Call [`request`](Self::request) on every scroll event and schedule a
/// frame only when it returns true; call [`complete`](Self::complete) from
/// inside the frame callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns true if the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Element id an in-page anchor points at, e.g. `#work` -> `work`.
///
/// A bare `#` or a non-fragment link has no target.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the fixed header.
pub fn smooth_scroll_top(section_offset_top: f64, header_height: f64) -> f64 {
    section_offset_top - header_height
}

/// Resolve an in-page anchor click.
///
/// `section_top` looks a target id up and returns its offset top. When the
/// target exists the mobile menu is closed and the scroll position to move
/// to is returned; otherwise nothing happens and the menu is left alone.
pub fn navigate(
    href: &str,
    menu: &mut MobileMenu,
    header_height: f64,
    section_top: impl FnOnce(&str) -> Option<f64>,
) -> Option<f64> {
    let top = anchor_target_id(href).and_then(section_top)?;
    menu.close();
    Some(smooth_scroll_top(top, header_height))
}
