//! Hero video playback state.
//!
//! Autoplay is attempted once. If the platform refuses it the play overlay
//! is shown until the user starts playback, either through the overlay or
//! by clicking the paused video container.

/// Tracks whether the manual play overlay should be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroPlayback {
    overlay_visible: bool,
}

impl HeroPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the play overlay is showing.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// The initial autoplay attempt was rejected.
    pub fn autoplay_rejected(&mut self) {
        self.overlay_visible = true;
    }

    /// The overlay was clicked. Always asks for playback.
    pub fn overlay_clicked(&mut self) -> bool {
        self.overlay_visible = false;
        true
    }

    /// The video container was clicked. Asks for playback only when the
    /// video is paused.
    pub fn container_clicked(&mut self, paused: bool) -> bool {
        if paused {
            self.overlay_visible = false;
        }
        paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_hidden_until_rejected() {
        let mut hero = HeroPlayback::new();
        assert!(!hero.overlay_visible());
        hero.autoplay_rejected();
        assert!(hero.overlay_visible());
    }

    #[test]
    fn test_overlay_click_starts_playback() {
        let mut hero = HeroPlayback::new();
        hero.autoplay_rejected();
        assert!(hero.overlay_clicked());
        assert!(!hero.overlay_visible());
    }

    #[test]
    fn test_container_click_only_plays_when_paused() {
        let mut hero = HeroPlayback::new();
        hero.autoplay_rejected();

        assert!(!hero.container_clicked(false));
        assert!(hero.overlay_visible());

        assert!(hero.container_clicked(true));
        assert!(!hero.overlay_visible());
    }
}
