//! Page configuration.
//!
//! The host page may embed a JSON block to tune the effects:
//!
//! ```html
//! <script type="application/json" id="showreel-config">
//!   { "navbar_threshold": 80, "log_format": "json" }
//! </script>
//! ```
//!
//! Every key is optional; omitted keys keep the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{ShowreelError, ShowreelResult};
use crate::logging::LogFormat;
use crate::parallax::DockTarget;

/// Element id of the optional configuration block.
pub const CONFIG_ELEMENT_ID: &str = "showreel-config";

/// Tunables for every controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowreelConfig {
    /// `EnvFilter` directive (e.g. "info", "showreel_core=debug")
    pub log_filter: String,
    /// Console rendering of log entries
    pub log_format: LogFormat,
    /// Pixels scrolled before the navbar gets its `scrolled` class
    pub navbar_threshold: f64,
    /// Docking target of the parallax hero video
    pub dock: DockTarget,
    /// Visible fraction that counts as intersecting for reveal
    pub reveal_threshold: f64,
    /// Root margin handed to the reveal observer
    pub reveal_root_margin: String,
    /// Transition delay added per grid index, in seconds
    pub stagger_step_secs: f64,
    /// Mouse parallax travel per floating element index, in pixels
    pub float_speed_step: f64,
    /// Scroll parallax factor per glow index
    pub glow_speed_step: f64,
    /// Offset added to the scroll position when picking the active section
    pub active_nav_offset: f64,
    /// Delay between preloader fade-out and removal
    pub preloader_fade_ms: u32,
    /// Start the cursor trail on load
    pub cursor_trail: bool,
    /// Number of dots in the cursor trail
    pub trail_length: usize,
    /// Assumed frame duration for the counter animation
    pub counter_frame_ms: f64,
}

impl Default for ShowreelConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
            navbar_threshold: 50.0,
            dock: DockTarget::default(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            stagger_step_secs: 0.1,
            float_speed_step: 15.0,
            glow_speed_step: 0.1,
            active_nav_offset: 200.0,
            preloader_fade_ms: 500,
            cursor_trail: false,
            trail_length: 20,
            counter_frame_ms: 16.0,
        }
    }
}

impl ShowreelConfig {
    /// Parse a configuration block.
    pub fn from_json(json: &str) -> ShowreelResult<Self> {
        serde_json::from_str(json).map_err(ShowreelError::InvalidConfig)
    }

    /// Resolve the page's optional block. Returns the defaults when it is
    /// absent or blank; a malformed block also yields the defaults, together
    /// with the parse error so the caller can report it once logging is up.
    pub fn from_page_block(json: Option<&str>) -> (Self, Option<ShowreelError>) {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => (Self::default(), None),
            Some(body) => match Self::from_json(body) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = ShowreelConfig::default();
        assert_eq!(config.navbar_threshold, 50.0);
        assert_eq!(config.dock.top_pct, 11.0);
        assert_eq!(config.dock.left_pct, 16.97);
        assert_eq!(config.dock.width_pct, 55.3);
        assert_eq!(config.trail_length, 20);
        assert!(!config.cursor_trail);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ShowreelConfig::from_json(r#"{ "navbar_threshold": 80, "log_format": "json" }"#)
                .unwrap();
        assert_eq!(config.navbar_threshold, 80.0);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.preloader_fade_ms, 500);
    }

    #[test]
    fn test_nested_dock_override_keeps_other_fields() {
        let config = ShowreelConfig::from_json(r#"{ "dock": { "top_pct": 5 } }"#).unwrap();
        assert_eq!(config.dock.top_pct, 5.0);
        assert_eq!(config.dock.width_pct, 55.3);
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(matches!(
            ShowreelConfig::from_json("{ nope"),
            Err(ShowreelError::InvalidConfig(_))
        ));

        let (config, error) = ShowreelConfig::from_page_block(Some("{ nope"));
        assert_eq!(config, ShowreelConfig::default());
        assert!(matches!(error, Some(ShowreelError::InvalidConfig(_))));
    }

    #[test]
    fn test_absent_or_blank_block() {
        for block in [None, Some(""), Some("  \n ")] {
            let (config, error) = ShowreelConfig::from_page_block(block);
            assert_eq!(config, ShowreelConfig::default());
            assert!(error.is_none());
        }
    }
}
