//! Active navigation link highlighting.

/// Vertical extent of a navigable section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section the reader is in: the last one containing
/// `scroll_y + offset`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Whether a nav link with `href` should be highlighted.
pub fn is_active_link(href: Option<&str>, active: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), active) {
        (Some(target), Some(id)) => target == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 800.0 },
            SectionBounds { id: "work".into(), top: 800.0, height: 1200.0 },
            SectionBounds { id: "contact".into(), top: 2000.0, height: 600.0 },
        ]
    }

    #[test]
    fn test_offset_applies() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&s, 600.0, 200.0), Some("work"));
        assert_eq!(active_section(&s, 599.0, 200.0), Some("home"));
    }

    #[test]
    fn test_past_last_section() {
        assert_eq!(active_section(&sections(), 5000.0, 200.0), None);
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let s = vec![
            SectionBounds { id: "a".into(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "b".into(), top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(&s, 600.0, 0.0), Some("b"));
    }

    #[test]
    fn test_link_matching() {
        assert!(is_active_link(Some("#work"), Some("work")));
        assert!(!is_active_link(Some("#work"), Some("home")));
        assert!(!is_active_link(Some("#"), None));
        assert!(!is_active_link(None, Some("work")));
    }
}
