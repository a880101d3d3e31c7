//! Parallax hero video.
//!
//! Samples the section's geometry on every throttled scroll frame, runs it
//! through [`layout`] and writes the resulting frame onto the container,
//! wrapper, background and header. Also owns hero autoplay and the manual
//! play overlay.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use showreel_core::parallax::{layout, scroll_progress, SectionMetrics};
use showreel_core::{HeroPlayback, ParallaxFrame};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlElement, HtmlVideoElement, Window};

use crate::components::media::play_quietly;
use crate::context::{set_class, set_style, PageContext};
use crate::scheduler::ScrollScheduler;

pub const SECTION_SELECTOR: &str = ".parallax-section";
pub const CONTAINER_SELECTOR: &str = ".main-video-container";
pub const WRAPPER_SELECTOR: &str = ".main-video-wrapper";
pub const VIDEO_SELECTOR: &str = ".main-video";
pub const BACKGROUND_SELECTOR: &str = ".editor-background";
pub const HEADER_SELECTOR: &str = ".parallax-header";
pub const OVERLAY_ID: &str = "videoPlayOverlay";

/// Elements the zoom writes to. Only the section and container are required.
struct ZoomTargets {
    section: HtmlElement,
    container: HtmlElement,
    wrapper: Option<HtmlElement>,
    background: Option<HtmlElement>,
    header: Option<Element>,
}

impl ZoomTargets {
    fn sample(&self, window: &Window) -> SectionMetrics {
        let rect = self.section.get_bounding_client_rect();
        SectionMetrics {
            top: rect.top(),
            height: self.section.offset_height() as f64,
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
        }
    }

    fn apply(&self, frame: &ParallaxFrame) {
        for (property, value) in frame.video.css_properties() {
            set_style(&self.container, property, &value);
        }

        if let Some(wrapper) = &self.wrapper {
            let align = if frame.center_wrapper { "center" } else { "" };
            set_style(wrapper, "align-items", align);
            set_style(wrapper, "justify-content", align);
        }

        if let Some(background) = &self.background {
            set_style(background, "opacity", &frame.background_opacity.to_string());
            set_class(background, "visible", frame.background_visible);
        }

        if let Some(header) = &self.header {
            set_class(header, "visible", frame.header_visible);
        }
    }
}

/// The mounted parallax section.
pub struct ParallaxVideo {
    playback: Rc<RefCell<HeroPlayback>>,
    _listeners: Vec<EventListener>,
}

impl ParallaxVideo {
    pub fn mount(ctx: &PageContext, scheduler: &ScrollScheduler) -> Option<Self> {
        let Some(section) = ctx.query_as::<HtmlElement>(SECTION_SELECTOR) else {
            tracing::debug!(selector = SECTION_SELECTOR, "parallax disabled");
            return None;
        };
        let Some(container) = ctx.query_as::<HtmlElement>(CONTAINER_SELECTOR) else {
            tracing::debug!(selector = CONTAINER_SELECTOR, "parallax disabled");
            return None;
        };

        let targets = ZoomTargets {
            section,
            container: container.clone(),
            wrapper: ctx.query_as(WRAPPER_SELECTOR),
            background: ctx.query_as(BACKGROUND_SELECTOR),
            header: ctx.query(HEADER_SELECTOR),
        };

        let window = ctx.window.clone();
        let dock = ctx.config.dock;
        scheduler.subscribe(move |_| {
            let progress = scroll_progress(targets.sample(&window));
            targets.apply(&layout(progress, &dock));
        });

        let playback = Rc::new(RefCell::new(HeroPlayback::new()));
        let listeners = match (
            ctx.query_as::<HtmlVideoElement>(VIDEO_SELECTOR),
            ctx.by_id::<HtmlElement>(OVERLAY_ID),
        ) {
            (Some(video), Some(overlay)) => wire_playback(&playback, container, video, overlay),
            _ => {
                tracing::debug!("hero playback controls disabled");
                Vec::new()
            }
        };

        Some(Self {
            playback,
            _listeners: listeners,
        })
    }

    pub fn overlay_visible(&self) -> bool {
        self.playback.borrow().overlay_visible()
    }
}

fn wire_playback(
    playback: &Rc<RefCell<HeroPlayback>>,
    container: HtmlElement,
    video: HtmlVideoElement,
    overlay: HtmlElement,
) -> Vec<EventListener> {
    attempt_autoplay(Rc::clone(playback), video.clone(), overlay.clone());

    let on_overlay = {
        let playback = Rc::clone(playback);
        let video = video.clone();
        let shown = overlay.clone();
        EventListener::new(&overlay, "click", move |_| {
            if playback.borrow_mut().overlay_clicked() {
                set_class(&shown, "visible", false);
                play_quietly(&video);
            }
        })
    };

    let on_container = {
        let playback = Rc::clone(playback);
        EventListener::new(&container, "click", move |_| {
            if playback.borrow_mut().container_clicked(video.paused()) {
                set_class(&overlay, "visible", false);
                play_quietly(&video);
            }
        })
    };

    vec![on_overlay, on_container]
}

fn attempt_autoplay(playback: Rc<RefCell<HeroPlayback>>, video: HtmlVideoElement, overlay: HtmlElement) {
    let promise = match video.play() {
        Ok(promise) => promise,
        Err(e) => {
            tracing::debug!(error = ?e, "autoplay threw");
            playback.borrow_mut().autoplay_rejected();
            set_class(&overlay, "visible", true);
            return;
        }
    };

    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            tracing::debug!(error = ?e, "autoplay rejected, showing play overlay");
            playback.borrow_mut().autoplay_rejected();
            set_class(&overlay, "visible", true);
        }
    });
}
