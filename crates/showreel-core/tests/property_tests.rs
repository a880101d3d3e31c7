//! Property-based tests for the scroll-driven layout
//!
//! Uses proptest to verify the progress and parallax invariants hold for
//! arbitrary page geometry.

use proptest::prelude::*;
use showreel_core::parallax::{
    layout, scroll_progress, DockTarget, Phase, SectionMetrics, BACKGROUND_REVEAL_T,
    HEADER_REVEAL_T,
};
use showreel_core::scroll::FrameThrottle;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any finite section geometry, including sections shorter than the viewport
fn metrics_strategy() -> impl Strategy<Value = SectionMetrics> {
    (-50_000.0..50_000.0f64, 0.0..20_000.0f64, 1.0..4_000.0f64).prop_map(
        |(top, height, viewport_height)| SectionMetrics {
            top,
            height,
            viewport_height,
        },
    )
}

/// Transition-phase progress values
fn transition_progress() -> impl Strategy<Value = f64> {
    0.3..0.7f64
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Progress is always inside [0, 1]
    #[test]
    fn progress_is_clamped(metrics in metrics_strategy()) {
        let progress = scroll_progress(metrics);
        prop_assert!((0.0..=1.0).contains(&progress), "progress {} out of range", progress);
    }

    /// Layout is a pure function of progress
    #[test]
    fn layout_is_idempotent(metrics in metrics_strategy()) {
        let target = DockTarget::default();
        let first = layout(scroll_progress(metrics), &target);
        let second = layout(scroll_progress(metrics), &target);
        prop_assert_eq!(first, second);
    }

    /// Width shrinks and radius grows as the transition advances
    #[test]
    fn transition_is_monotonic(a in transition_progress(), b in transition_progress()) {
        prop_assume!(b - a > 1e-9);
        let target = DockTarget::default();
        let early = layout(a, &target).video;
        let late = layout(b, &target).video;

        prop_assert!(late.width_pct < early.width_pct);
        prop_assert!(late.radius_px > early.radius_px);
        prop_assert!(late.top_pct > early.top_pct);
        prop_assert!(late.left_pct > early.left_pct);
    }

    /// Transition geometry stays between fullscreen and docked
    #[test]
    fn transition_within_bounds(p in transition_progress()) {
        let target = DockTarget::default();
        let video = layout(p, &target).video;
        prop_assert!(video.width_pct <= 100.0 && video.width_pct > target.width_pct);
        prop_assert!(video.radius_px >= 0.0 && video.radius_px < target.radius_px);
    }

    /// Decorations follow their hysteresis thresholds exactly
    #[test]
    fn decoration_thresholds(p in transition_progress()) {
        let frame = layout(p, &DockTarget::default());
        let Phase::Transition { t } = frame.phase else {
            return Err(TestCaseError::fail("expected transition phase"));
        };
        prop_assert_eq!(frame.background_visible, t > BACKGROUND_REVEAL_T);
        prop_assert_eq!(frame.header_visible, t > HEADER_REVEAL_T);
        prop_assert_eq!(frame.background_opacity, t);
    }

    /// However many scroll events arrive, only the first schedules a frame
    #[test]
    fn throttle_schedules_once_per_frame(bursts in prop::collection::vec(1..50usize, 1..20)) {
        let mut throttle = FrameThrottle::new();
        let mut scheduled = 0;
        for events in &bursts {
            for _ in 0..*events {
                if throttle.request() {
                    scheduled += 1;
                }
            }
            throttle.complete();
        }
        prop_assert_eq!(scheduled, bursts.len());
    }
}
