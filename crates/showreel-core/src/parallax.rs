//! Parallax video zoom.
//!
//! As the page scrolls through the parallax section the hero video shrinks
//! from fullscreen into the preview panel of an editor mock-up, then stays
//! docked there. Everything here is a pure function of scroll progress:
//!
//! | progress     | phase      | video                                   |
//! |--------------|------------|-----------------------------------------|
//! | `[0, 0.3)`   | fullscreen | fills the wrapper, square corners       |
//! | `[0.3, 0.7)` | transition | interpolates toward the dock, 16:9 lock |
//! | `[0.7, 1]`   | docked     | pinned at the dock target               |

use serde::{Deserialize, Serialize};

/// Progress at which the fullscreen phase ends.
pub const FULLSCREEN_END: f64 = 0.3;
/// Progress at which the video is fully docked.
pub const DOCK_START: f64 = 0.7;
/// Width of the transition phase in progress units.
const TRANSITION_SPAN: f64 = 0.4;
/// The background becomes visible once `t` exceeds this.
pub const BACKGROUND_REVEAL_T: f64 = 0.2;
/// The header becomes visible once `t` exceeds this.
pub const HEADER_REVEAL_T: f64 = 0.8;

/// Where the video ends up, as percentages of the section box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockTarget {
    pub top_pct: f64,
    pub left_pct: f64,
    pub width_pct: f64,
    pub radius_px: f64,
    pub aspect_width: u32,
    pub aspect_height: u32,
}

impl Default for DockTarget {
    fn default() -> Self {
        Self {
            top_pct: 11.0,
            left_pct: 16.97,
            width_pct: 55.3,
            radius_px: 2.0,
            aspect_width: 16,
            aspect_height: 9,
        }
    }
}

impl DockTarget {
    /// CSS `aspect-ratio` value, e.g. `16 / 9`.
    pub fn aspect_css(&self) -> String {
        format!("{} / {}", self.aspect_width, self.aspect_height)
    }
}

/// Geometry sampled from the page on a scroll tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    /// Section top relative to the viewport (negative once scrolled past)
    pub top: f64,
    /// Total section height
    pub height: f64,
    /// Viewport height
    pub viewport_height: f64,
}

/// Normalized scroll progress through the section, always in `[0, 1]`.
///
/// A section no taller than the viewport has no scroll range; it reads as
/// complete once its top has moved above the viewport and as untouched
/// otherwise.
pub fn scroll_progress(metrics: SectionMetrics) -> f64 {
    let scrolled = -metrics.top;
    let range = metrics.height - metrics.viewport_height;

    if range <= 0.0 {
        return if scrolled > 0.0 { 1.0 } else { 0.0 };
    }

    let progress = scrolled / range;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Which of the three zoom phases a progress value falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Fullscreen,
    /// `t` runs from 0 at the start of the transition toward 1
    Transition { t: f64 },
    Docked,
}

impl Phase {
    pub fn from_progress(progress: f64) -> Self {
        if progress < FULLSCREEN_END {
            Phase::Fullscreen
        } else if progress < DOCK_START {
            Phase::Transition {
                t: (progress - FULLSCREEN_END) / TRANSITION_SPAN,
            }
        } else {
            Phase::Docked
        }
    }
}

/// CSS `position` of the video container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

impl Position {
    pub fn as_css(self) -> &'static str {
        match self {
            Position::Relative => "relative",
            Position::Absolute => "absolute",
        }
    }
}

/// CSS `height` of the video container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    /// Fill the wrapper
    Full,
    /// Derived from width and the aspect lock
    Auto,
}

impl Height {
    pub fn as_css(self) -> &'static str {
        match self {
            Height::Full => "100%",
            Height::Auto => "auto",
        }
    }
}

/// Placement of the video container for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoLayout {
    pub position: Position,
    pub width_pct: f64,
    pub height: Height,
    pub top_pct: f64,
    pub left_pct: f64,
    pub radius_px: f64,
    /// `None` clears any aspect-ratio lock
    pub aspect_ratio: Option<String>,
}

impl VideoLayout {
    /// Style declarations to apply, in order. An empty value removes the
    /// property.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", self.position.as_css().to_string()),
            ("width", format!("{}%", self.width_pct)),
            ("height", self.height.as_css().to_string()),
            ("top", format!("{}%", self.top_pct)),
            ("left", format!("{}%", self.left_pct)),
            ("border-radius", format!("{}px", self.radius_px)),
            ("aspect-ratio", self.aspect_ratio.clone().unwrap_or_default()),
        ]
    }
}

/// Everything the parallax section looks like at one progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxFrame {
    pub phase: Phase,
    pub video: VideoLayout,
    /// The wrapper centers the video on both axes
    pub center_wrapper: bool,
    pub background_opacity: f64,
    pub background_visible: bool,
    pub header_visible: bool,
}

/// Compute the frame for `progress` against `target`.
pub fn layout(progress: f64, target: &DockTarget) -> ParallaxFrame {
    let phase = Phase::from_progress(progress);

    match phase {
        Phase::Fullscreen => ParallaxFrame {
            phase,
            video: VideoLayout {
                position: Position::Relative,
                width_pct: 100.0,
                height: Height::Full,
                top_pct: 0.0,
                left_pct: 0.0,
                radius_px: 0.0,
                aspect_ratio: None,
            },
            center_wrapper: true,
            background_opacity: 0.0,
            background_visible: false,
            header_visible: false,
        },
        Phase::Transition { t } => ParallaxFrame {
            phase,
            video: VideoLayout {
                position: Position::Absolute,
                width_pct: 100.0 - t * (100.0 - target.width_pct),
                height: Height::Auto,
                top_pct: t * target.top_pct,
                left_pct: t * target.left_pct,
                radius_px: t * target.radius_px,
                aspect_ratio: Some(target.aspect_css()),
            },
            center_wrapper: false,
            background_opacity: t,
            background_visible: t > BACKGROUND_REVEAL_T,
            header_visible: t > HEADER_REVEAL_T,
        },
        Phase::Docked => ParallaxFrame {
            phase,
            video: VideoLayout {
                position: Position::Absolute,
                width_pct: target.width_pct,
                height: Height::Auto,
                top_pct: target.top_pct,
                left_pct: target.left_pct,
                radius_px: target.radius_px,
                aspect_ratio: Some(target.aspect_css()),
            },
            center_wrapper: false,
            background_opacity: 1.0,
            background_visible: true,
            header_visible: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(top: f64, height: f64, viewport_height: f64) -> SectionMetrics {
        SectionMetrics {
            top,
            height,
            viewport_height,
        }
    }

    #[test]
    fn test_progress_midway() {
        // 3000px section in a 1000px viewport scrolled 1000px in
        assert_eq!(scroll_progress(metrics(-1000.0, 3000.0, 1000.0)), 0.5);
    }

    #[test]
    fn test_progress_clamps_both_ends() {
        assert_eq!(scroll_progress(metrics(400.0, 3000.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(-5000.0, 3000.0, 1000.0)), 1.0);
    }

    #[test]
    fn test_progress_without_scroll_range() {
        assert_eq!(scroll_progress(metrics(0.0, 800.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(10.0, 1000.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(-10.0, 1000.0, 1000.0)), 1.0);
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(Phase::from_progress(0.29999), Phase::Fullscreen);
        assert_eq!(Phase::from_progress(0.3), Phase::Transition { t: 0.0 });
        assert_eq!(Phase::from_progress(0.7), Phase::Docked);
        assert_eq!(Phase::from_progress(1.0), Phase::Docked);
    }

    #[test]
    fn test_fullscreen_frame() {
        let frame = layout(0.1, &DockTarget::default());
        assert_eq!(frame.video.position, Position::Relative);
        assert_eq!(frame.video.width_pct, 100.0);
        assert_eq!(frame.video.aspect_ratio, None);
        assert!(frame.center_wrapper);
        assert!(!frame.background_visible);
        assert!(!frame.header_visible);
    }

    #[test]
    fn test_transition_start_locks_aspect() {
        let frame = layout(0.3, &DockTarget::default());
        assert_eq!(frame.video.position, Position::Absolute);
        assert_eq!(frame.video.width_pct, 100.0);
        assert_eq!(frame.video.radius_px, 0.0);
        assert_eq!(frame.video.aspect_ratio.as_deref(), Some("16 / 9"));
        assert_eq!(frame.background_opacity, 0.0);
    }

    #[test]
    fn test_transition_midpoint() {
        // progress 0.5 -> t = 0.5
        let frame = layout(0.5, &DockTarget::default());
        let Phase::Transition { t } = frame.phase else {
            panic!("expected transition, got {:?}", frame.phase);
        };
        assert!((t - 0.5).abs() < 1e-9);
        assert!((frame.video.width_pct - 77.65).abs() < 1e-9);
        assert!((frame.video.top_pct - 5.5).abs() < 1e-9);
        assert!((frame.video.radius_px - 1.0).abs() < 1e-9);
        assert!(frame.background_visible);
        assert!(!frame.header_visible);
    }

    #[test]
    fn test_docked_frame() {
        let frame = layout(0.85, &DockTarget::default());
        assert_eq!(frame.video.width_pct, 55.3);
        assert_eq!(frame.video.top_pct, 11.0);
        assert_eq!(frame.video.left_pct, 16.97);
        assert_eq!(frame.video.radius_px, 2.0);
        assert_eq!(frame.background_opacity, 1.0);
        assert!(frame.background_visible && frame.header_visible);
    }

    #[test]
    fn test_css_properties() {
        let css = layout(1.0, &DockTarget::default()).video.css_properties();
        assert!(css.contains(&("width", "55.3%".to_string())));
        assert!(css.contains(&("border-radius", "2px".to_string())));
        assert!(css.contains(&("aspect-ratio", "16 / 9".to_string())));

        let css = layout(0.0, &DockTarget::default()).video.css_properties();
        assert!(css.contains(&("height", "100%".to_string())));
        assert!(css.contains(&("aspect-ratio", String::new())));
    }
}
