//! Edge case and boundary condition tests
//!
//! These tests verify the phase boundaries, degenerate geometry and
//! malformed card data are handled without surprises.

use showreel_core::parallax::{layout, scroll_progress, DockTarget, Phase, SectionMetrics};
use showreel_core::{Playlist, ShowreelError};

// ============================================================================
// Phase Boundaries
// ============================================================================

#[test]
fn test_just_before_transition_is_fullscreen() {
    let frame = layout(0.29999, &DockTarget::default());
    assert_eq!(frame.phase, Phase::Fullscreen);
    assert_eq!(frame.video.width_pct, 100.0);
}

#[test]
fn test_transition_starts_at_zero() {
    let frame = layout(0.3, &DockTarget::default());
    assert_eq!(frame.phase, Phase::Transition { t: 0.0 });
    assert!(!frame.background_visible);
    assert!(!frame.header_visible);
}

#[test]
fn test_docked_at_exactly_point_seven() {
    let target = DockTarget::default();
    let frame = layout(0.7, &target);
    assert_eq!(frame.phase, Phase::Docked);
    assert_eq!(frame.video.width_pct, target.width_pct);
}

#[test]
fn test_background_threshold_is_exclusive() {
    // t = 0.2 at progress 0.38
    let target = DockTarget::default();

    let below = layout(0.3799, &target);
    assert!(matches!(below.phase, Phase::Transition { t } if t < 0.2));
    assert!(!below.background_visible);

    let above = layout(0.3801, &target);
    assert!(matches!(above.phase, Phase::Transition { t } if t > 0.2));
    assert!(above.background_visible);
    assert!(!above.header_visible);
}

#[test]
fn test_header_threshold_is_exclusive() {
    // t = 0.8 at progress 0.62
    let target = DockTarget::default();

    let below = layout(0.6199, &target);
    assert!(below.background_visible);
    assert!(!below.header_visible);

    let above = layout(0.6201, &target);
    assert!(above.header_visible);
}

// ============================================================================
// Degenerate Geometry
// ============================================================================

#[test]
fn test_section_equal_to_viewport() {
    let m = SectionMetrics {
        top: 0.0,
        height: 900.0,
        viewport_height: 900.0,
    };
    let progress = scroll_progress(m);
    assert!(progress.is_finite());
    assert_eq!(progress, 0.0);
}

#[test]
fn test_section_shorter_than_viewport_scrolled_past() {
    let m = SectionMetrics {
        top: -300.0,
        height: 500.0,
        viewport_height: 900.0,
    };
    assert_eq!(scroll_progress(m), 1.0);
}

#[test]
fn test_custom_dock_target() {
    let target = DockTarget {
        top_pct: 20.0,
        left_pct: 10.0,
        width_pct: 40.0,
        radius_px: 8.0,
        aspect_width: 4,
        aspect_height: 3,
    };
    let frame = layout(1.0, &target);
    assert_eq!(frame.video.radius_px, 8.0);
    assert_eq!(frame.video.aspect_ratio.as_deref(), Some("4 / 3"));
}

// ============================================================================
// Card Data
// ============================================================================

#[test]
fn test_playlist_wrong_shape() {
    for bad in [r#"[1, 2]"#, r#""a.mp4""#, "", "[\"a.mp4\""] {
        assert!(
            matches!(
                Playlist::from_json(bad, "x"),
                Err(ShowreelError::MalformedPlaylist(_))
            ),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_playlist_empty_label_allowed() {
    let playlist = Playlist::from_json(r#"["a.mp4"]"#, "").unwrap();
    assert_eq!(playlist.label(), "");
    assert_eq!(playlist.sources().len(), 1);
}
