//! Mobile navigation menu state.

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

/// Where a document click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the toggle control
    Toggle,
    /// Inside the link list
    Menu,
    /// Anywhere else
    Outside,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click anywhere in the document. Clicks outside both the toggle and
    /// the menu close it; returns true if that changed the state.
    pub fn document_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Outside => self.close(),
            ClickTarget::Toggle | ClickTarget::Menu => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut menu = MobileMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(!menu.document_click(ClickTarget::Menu));
        assert!(!menu.document_click(ClickTarget::Toggle));
        assert!(menu.is_open());

        assert!(menu.document_click(ClickTarget::Outside));
        assert!(!menu.is_open());
        assert!(!menu.document_click(ClickTarget::Outside));
    }

    #[test]
    fn test_close_reports_previous_state() {
        let mut menu = MobileMenu::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
