//! One-shot reveal-on-scroll tracking and grid stagger delays.

/// Elements that fade in when they first enter the viewport.
pub const REVEAL_SELECTOR: &str =
    ".section-header, .project-card, .tool-card, .contact-link, .cta-card, .featured-video";

/// Grids whose children reveal one after another.
pub const STAGGER_GROUPS: [&str; 2] = [".projects-grid .project-card", ".tools-grid .tool-card"];

/// Which observed elements have been revealed, by registration index.
///
/// An element is only ever revealed once; leaving the viewport again does
/// not clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Record an intersection report. Returns true only the first time the
    /// element is seen intersecting.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

/// CSS `transition-delay` for the `index`th element of a grid.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_revealed_before_intersecting() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(!tracker.is_revealed(0));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(2);
        assert!(tracker.observe(1, true));
        assert!(!tracker.observe(1, true));
        assert!(!tracker.observe(1, false));
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn test_unknown_index_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(7, true));
        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.1), "0s");
        assert_eq!(stagger_delay(1, 0.1), "0.1s");
        assert_eq!(stagger_delay(4, 0.25), "1s");
    }
}
