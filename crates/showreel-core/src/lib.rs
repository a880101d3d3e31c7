//! Showreel Core Library
//!
//! Host-independent behavior of a single-page visual portfolio.
//!
//! ## Overview
//!
//! The page reacts to scroll, pointer and keyboard input with a handful of
//! presentation effects. This crate holds the part of that which can be
//! reasoned about without a browser:
//!
//! - **Parallax video zoom**: `parallax::layout` maps scroll progress to the
//!   hero video's placement, a pure function with three phases
//! - **Gallery modal**: `gallery::Gallery` is a `Closed | Open` state machine
//!   over a card's playlist that owns the page scroll lock while open
//! - **Everything else**: navbar threshold, mobile menu, reveal tracking,
//!   active section lookup, frame throttling and the ambient effect math
//!
//! The browser binding (the `showreel` crate) samples geometry, feeds these
//! types, and applies what they return.
//!
//! ## Quick Start
//!
//! ```
//! use showreel_core::parallax::{layout, scroll_progress, DockTarget, SectionMetrics};
//!
//! let progress = scroll_progress(SectionMetrics {
//!     top: -1500.0,
//!     height: 3000.0,
//!     viewport_height: 1000.0,
//! });
//! let frame = layout(progress, &DockTarget::default());
//! assert!(frame.header_visible);
//! ```

pub mod active_nav;
pub mod ambient;
pub mod config;
pub mod error;
pub mod gallery;
pub mod hero;
pub mod logging;
pub mod menu;
pub mod navbar;
pub mod parallax;
pub mod reveal;
pub mod scroll;

// Re-exports
pub use config::ShowreelConfig;
pub use error::{ShowreelError, ShowreelResult};
pub use gallery::{Gallery, GalleryKey, GalleryUpdate, ItemView, Playlist, ScrollGuard, ScrollLock};
pub use hero::HeroPlayback;
pub use menu::{ClickTarget, MobileMenu};
pub use navbar::NavbarState;
pub use parallax::{layout, scroll_progress, DockTarget, ParallaxFrame, Phase, SectionMetrics};
pub use reveal::RevealTracker;
pub use scroll::FrameThrottle;
