//! Page controllers.
//!
//! Each controller resolves its own elements and disables itself when they
//! are missing. Scroll-driven controllers subscribe to the shared
//! [`ScrollScheduler`](crate::scheduler::ScrollScheduler).

mod active_nav;
mod ambient;
pub mod cursor_trail;
pub mod media;
pub mod mobile_nav;
mod navbar;
mod parallax_video;
pub mod preloader;
mod reveal;
mod smooth_scroll;
pub mod text_effects;
mod video_gallery;

pub use active_nav::ActiveNav;
pub use ambient::Ambient;
pub use cursor_trail::CursorTrailEffect;
pub use mobile_nav::{MenuHandle, MobileNav};
pub use navbar::Navbar;
pub use parallax_video::ParallaxVideo;
pub use reveal::Reveal;
pub use smooth_scroll::SmoothScroll;
pub use video_gallery::{BodyScrollLock, VideoGallery};
