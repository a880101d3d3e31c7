//! Navbar `scrolled` flag.

/// Tracks whether the page has scrolled past the navbar threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    threshold: f64,
    scrolled: bool,
}

impl NavbarState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed the current vertical scroll offset. Returns the new flag when it
    /// changed.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut nav = NavbarState::new(50.0);
        assert_eq!(nav.update(50.0), None);
        assert_eq!(nav.update(50.5), Some(true));
        assert_eq!(nav.update(400.0), None);
        assert_eq!(nav.update(0.0), Some(false));
        assert!(!nav.is_scrolled());
    }
}
