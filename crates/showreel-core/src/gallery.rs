//! Video gallery modal state machine.
//!
//! A card activation opens the modal on the card's playlist; next/prev walk
//! it without wrapping, and any close path returns to [`Gallery::is_open`]
//! `== false`. Page scrolling is suspended for exactly as long as the modal
//! is open: the `Open` state owns a [`ScrollGuard`], so leaving it by any
//! route releases the lock.

use crate::error::{ShowreelError, ShowreelResult};

/// Suspends and restores page scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds the page scroll lock until dropped.
#[derive(Debug)]
pub struct ScrollGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

/// Ordered, non-empty list of video sources for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    sources: Vec<String>,
    label: String,
}

impl Playlist {
    /// Create a playlist. Fails if `sources` is empty.
    pub fn new(sources: Vec<String>, label: impl Into<String>) -> ShowreelResult<Self> {
        if sources.is_empty() {
            return Err(ShowreelError::EmptyPlaylist);
        }
        Ok(Self {
            sources,
            label: label.into(),
        })
    }

    /// Parse a card's `data-videos` attribute (a JSON array of strings).
    pub fn from_json(json: &str, label: impl Into<String>) -> ShowreelResult<Self> {
        let sources: Vec<String> =
            serde_json::from_str(json).map_err(ShowreelError::MalformedPlaylist)?;
        Self::new(sources, label)
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn len(&self) -> usize {
        self.sources.len()
    }
}

/// What the modal should show for the current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub label: String,
    pub source: String,
    pub index: usize,
    pub len: usize,
}

impl ItemView {
    /// Counter label, e.g. `2 / 5`.
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }

    pub fn prev_enabled(&self) -> bool {
        self.index > 0
    }

    pub fn next_enabled(&self) -> bool {
        self.index + 1 < self.len
    }
}

/// Keys the modal reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl GalleryKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(GalleryKey::Escape),
            "ArrowLeft" => Some(GalleryKey::ArrowLeft),
            "ArrowRight" => Some(GalleryKey::ArrowRight),
            _ => None,
        }
    }
}

/// Result of a transition the view has to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryUpdate {
    /// Pause, swap the source, reload and play this item
    Load(ItemView),
    /// Pause, clear the source and hide the modal
    Closed,
}

enum GalleryState<L: ScrollLock> {
    Closed,
    Open {
        playlist: Playlist,
        cursor: usize,
        scroll: ScrollGuard<L>,
    },
}

/// The gallery modal.
pub struct Gallery<L: ScrollLock + Clone> {
    lock: L,
    state: GalleryState<L>,
}

impl<L: ScrollLock + Clone> Gallery<L> {
    pub fn new(lock: L) -> Self {
        Self {
            lock,
            state: GalleryState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GalleryState::Open { .. })
    }

    /// The item on screen, if open.
    pub fn current(&self) -> Option<ItemView> {
        match &self.state {
            GalleryState::Closed => None,
            GalleryState::Open {
                playlist, cursor, ..
            } => Some(ItemView {
                label: playlist.label.clone(),
                source: playlist.sources[*cursor].clone(),
                index: *cursor,
                len: playlist.len(),
            }),
        }
    }

    /// Open on `playlist` at its first item, replacing any open playlist.
    pub fn activate(&mut self, playlist: Playlist) -> ItemView {
        let scroll = match std::mem::replace(&mut self.state, GalleryState::Closed) {
            GalleryState::Open { scroll, .. } => scroll,
            GalleryState::Closed => ScrollGuard::acquire(self.lock.clone()),
        };

        tracing::debug!(label = playlist.label(), videos = playlist.len(), "gallery opened");

        let view = ItemView {
            label: playlist.label.clone(),
            source: playlist.sources[0].clone(),
            index: 0,
            len: playlist.len(),
        };
        self.state = GalleryState::Open {
            playlist,
            cursor: 0,
            scroll,
        };
        view
    }

    /// Step forward. `None` when closed or already at the last item.
    pub fn next(&mut self) -> Option<ItemView> {
        self.step(1)
    }

    /// Step back. `None` when closed or already at the first item.
    pub fn prev(&mut self) -> Option<ItemView> {
        self.step(-1)
    }

    /// Close the modal. Returns false if it was not open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        // Dropping the Open state releases the scroll lock.
        self.state = GalleryState::Closed;
        if was_open {
            tracing::debug!("gallery closed");
        }
        was_open
    }

    /// Dismiss from the close control, the backdrop or Escape. Returns the
    /// update that clears the modal, or `None` if it was not open.
    pub fn dismiss(&mut self) -> Option<GalleryUpdate> {
        self.close().then_some(GalleryUpdate::Closed)
    }

    /// React to a key press. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: GalleryKey) -> Option<GalleryUpdate> {
        if !self.is_open() {
            return None;
        }
        match key {
            GalleryKey::Escape => self.dismiss(),
            GalleryKey::ArrowLeft => self.prev().map(GalleryUpdate::Load),
            GalleryKey::ArrowRight => self.next().map(GalleryUpdate::Load),
        }
    }

    fn step(&mut self, delta: isize) -> Option<ItemView> {
        let GalleryState::Open {
            playlist, cursor, ..
        } = &mut self.state
        else {
            return None;
        };

        let target = cursor.checked_add_signed(delta)?;
        if target >= playlist.len() {
            return None;
        }
        *cursor = target;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct DepthLock(Rc<Cell<i32>>);

    impl ScrollLock for DepthLock {
        fn lock(&self) {
            self.0.set(self.0.get() + 1);
        }
        fn unlock(&self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn reel() -> Playlist {
        Playlist::from_json(r#"["a.mp4","b.mp4","c.mp4"]"#, "Demo Reel").unwrap()
    }

    #[test]
    fn test_playlist_rejects_empty() {
        assert!(matches!(
            Playlist::from_json("[]", "x"),
            Err(ShowreelError::EmptyPlaylist)
        ));
        assert!(matches!(
            Playlist::from_json(r#"{"a":1}"#, "x"),
            Err(ShowreelError::MalformedPlaylist(_))
        ));
    }

    #[test]
    fn test_activate_shows_first_item() {
        let lock = DepthLock::default();
        let mut gallery = Gallery::new(lock.clone());

        let view = gallery.activate(reel());
        assert_eq!(view.counter_text(), "1 / 3");
        assert_eq!(view.label, "Demo Reel");
        assert_eq!(view.source, "a.mp4");
        assert!(!view.prev_enabled());
        assert!(view.next_enabled());
        assert_eq!(lock.0.get(), 1);
    }

    #[test]
    fn test_navigation_stops_at_bounds() {
        let mut gallery = Gallery::new(DepthLock::default());
        gallery.activate(reel());

        assert!(gallery.prev().is_none());
        gallery.next();
        let last = gallery.next().unwrap();
        assert_eq!(last.counter_text(), "3 / 3");
        assert!(!last.next_enabled());
        assert!(last.prev_enabled());

        assert!(gallery.next().is_none());
        assert_eq!(gallery.current().unwrap().counter_text(), "3 / 3");
    }

    #[test]
    fn test_reactivate_keeps_single_lock() {
        let lock = DepthLock::default();
        let mut gallery = Gallery::new(lock.clone());

        gallery.activate(reel());
        gallery.next();
        let view = gallery.activate(Playlist::new(vec!["z.mp4".into()], "Other").unwrap());
        assert_eq!(view.counter_text(), "1 / 1");
        assert!(!view.next_enabled() && !view.prev_enabled());
        assert_eq!(lock.0.get(), 1);

        assert!(gallery.close());
        assert_eq!(lock.0.get(), 0);
    }

    #[test]
    fn test_escape_closes_and_unlocks() {
        let lock = DepthLock::default();
        let mut gallery = Gallery::new(lock.clone());
        gallery.activate(reel());

        assert_eq!(
            gallery.handle_key(GalleryKey::Escape),
            Some(GalleryUpdate::Closed)
        );
        assert!(!gallery.is_open());
        assert_eq!(lock.0.get(), 0);
        assert!(!gallery.close());
        assert_eq!(lock.0.get(), 0);
    }

    #[test]
    fn test_dismiss_only_reports_when_open() {
        let lock = DepthLock::default();
        let mut gallery = Gallery::new(lock.clone());
        assert_eq!(gallery.dismiss(), None);

        gallery.activate(reel());
        assert_eq!(gallery.dismiss(), Some(GalleryUpdate::Closed));
        assert!(gallery.current().is_none());
        assert_eq!(lock.0.get(), 0);
        assert_eq!(gallery.dismiss(), None);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = Gallery::new(DepthLock::default());
        assert_eq!(gallery.handle_key(GalleryKey::ArrowRight), None);
        assert_eq!(gallery.handle_key(GalleryKey::Escape), None);
    }

    #[test]
    fn test_dropping_open_gallery_unlocks() {
        let lock = DepthLock::default();
        {
            let mut gallery = Gallery::new(lock.clone());
            gallery.activate(reel());
            assert_eq!(lock.0.get(), 1);
        }
        assert_eq!(lock.0.get(), 0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(GalleryKey::from_key("Escape"), Some(GalleryKey::Escape));
        assert_eq!(GalleryKey::from_key("ArrowLeft"), Some(GalleryKey::ArrowLeft));
        assert_eq!(GalleryKey::from_key("Enter"), None);
    }
}
