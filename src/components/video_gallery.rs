//! Video gallery modal.
//!
//! Cards carry their playlist in `data-videos`; activating one opens the
//! modal on its first video. The state machine lives in
//! [`showreel_core::gallery`]; this module resolves the modal's elements,
//! routes clicks and keys into it and renders each [`GalleryUpdate`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use showreel_core::{Gallery, GalleryKey, GalleryUpdate, ItemView, Playlist, ScrollLock};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlElement, HtmlSourceElement, HtmlVideoElement, KeyboardEvent,
};

use crate::components::media::{play_quietly, stop_and_rewind};
use crate::context::{query_within, set_class, set_style, PageContext};

pub const MODAL_ID: &str = "videoOverlayModal";
pub const BACKDROP_SELECTOR: &str = ".modal-backdrop";
pub const VIDEO_ID: &str = "modalVideo";
pub const SOURCE_ID: &str = "modalVideoSource";
pub const CLOSE_ID: &str = "modalClose";
pub const PREV_ID: &str = "modalPrev";
pub const NEXT_ID: &str = "modalNext";
pub const CATEGORY_ID: &str = "modalCategory";
pub const COUNTER_ID: &str = "modalCounter";
pub const CARD_SELECTOR: &str = ".project-card[data-videos]";
pub const PREVIEW_CARD_SELECTOR: &str = ".project-card";
pub const TITLE_SELECTOR: &str = ".project-title";
pub const PREVIEW_SELECTOR: &str = ".thumbnail-preview video";

/// Page scroll lock backed by `overflow: hidden` on the body.
#[derive(Clone)]
pub struct BodyScrollLock {
    body: HtmlElement,
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        set_style(&self.body, "overflow", "hidden");
    }

    fn unlock(&self) {
        set_style(&self.body, "overflow", "");
    }
}

/// The modal's elements.
#[derive(Clone)]
struct ModalView {
    modal: Element,
    video: HtmlVideoElement,
    source: HtmlSourceElement,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    category: Option<Element>,
    counter: Option<Element>,
}

impl ModalView {
    fn resolve(ctx: &PageContext) -> Option<Self> {
        Some(Self {
            modal: ctx.by_id(MODAL_ID)?,
            video: ctx.by_id(VIDEO_ID)?,
            source: ctx.by_id(SOURCE_ID)?,
            prev: ctx.by_id(PREV_ID),
            next: ctx.by_id(NEXT_ID),
            category: ctx.by_id(CATEGORY_ID),
            counter: ctx.by_id(COUNTER_ID),
        })
    }

    fn render(&self, update: &GalleryUpdate) {
        match update {
            GalleryUpdate::Load(item) => self.load(item),
            GalleryUpdate::Closed => self.hide(),
        }
    }

    fn show(&self, item: &ItemView) {
        if let Some(category) = &self.category {
            category.set_text_content(Some(&item.label));
        }
        set_class(&self.modal, "active", true);
        self.load(item);
    }

    fn load(&self, item: &ItemView) {
        if let Err(e) = self.video.pause() {
            tracing::debug!(error = ?e, "pause() threw");
        }
        self.source.set_src(&item.source);
        self.video.load();
        play_quietly(&self.video);

        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&item.counter_text()));
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(!item.prev_enabled());
        }
        if let Some(next) = &self.next {
            next.set_disabled(!item.next_enabled());
        }
    }

    /// The only place the modal source is cleared.
    fn hide(&self) {
        set_class(&self.modal, "active", false);
        if let Err(e) = self.video.pause() {
            tracing::debug!(error = ?e, "pause() threw");
        }
        self.source.set_src("");
    }
}

/// Gallery state plus the view that renders it.
#[derive(Clone)]
struct GalleryHandle {
    gallery: Rc<RefCell<Gallery<BodyScrollLock>>>,
    view: ModalView,
}

impl GalleryHandle {
    fn open(&self, playlist: Playlist) {
        let item = self.gallery.borrow_mut().activate(playlist);
        self.view.show(&item);
    }

    fn next(&self) {
        let item = self.gallery.borrow_mut().next();
        if let Some(item) = item {
            self.view.load(&item);
        }
    }

    fn prev(&self) {
        let item = self.gallery.borrow_mut().prev();
        if let Some(item) = item {
            self.view.load(&item);
        }
    }

    fn close(&self) {
        let update = self.gallery.borrow_mut().dismiss();
        if let Some(update) = update {
            self.view.render(&update);
        }
    }

    fn key(&self, key: GalleryKey) {
        let update = self.gallery.borrow_mut().handle_key(key);
        if let Some(update) = update {
            self.view.render(&update);
        }
    }
}

/// The mounted gallery.
pub struct VideoGallery {
    _handle: GalleryHandle,
    cards: usize,
    _listeners: Vec<EventListener>,
}

impl VideoGallery {
    pub fn mount(ctx: &PageContext) -> Option<Self> {
        let Some(view) = ModalView::resolve(ctx) else {
            tracing::debug!(id = MODAL_ID, "gallery disabled");
            return None;
        };
        let body = ctx.body()?;

        let handle = GalleryHandle {
            gallery: Rc::new(RefCell::new(Gallery::new(BodyScrollLock { body }))),
            view,
        };

        let mut listeners = control_listeners(ctx, &handle);
        let card_listeners = card_listeners(ctx, &handle);
        let cards = card_listeners.len();
        listeners.extend(card_listeners);
        listeners.extend(preview_listeners(ctx));

        tracing::debug!(cards, "gallery ready");
        Some(Self {
            _handle: handle,
            cards,
            _listeners: listeners,
        })
    }

    /// Cards with a valid playlist.
    pub fn card_count(&self) -> usize {
        self.cards
    }
}

fn control_listeners(ctx: &PageContext, handle: &GalleryHandle) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let close_targets = [
        ctx.by_id::<Element>(CLOSE_ID),
        query_within::<Element>(&handle.view.modal, BACKDROP_SELECTOR),
    ];
    for target in close_targets.into_iter().flatten() {
        let handle = handle.clone();
        listeners.push(EventListener::new(&target, "click", move |_| handle.close()));
    }

    if let Some(prev) = &handle.view.prev {
        let handle = handle.clone();
        listeners.push(EventListener::new(prev, "click", move |_| handle.prev()));
    }
    if let Some(next) = &handle.view.next {
        let handle = handle.clone();
        listeners.push(EventListener::new(next, "click", move |_| handle.next()));
    }

    let on_key = {
        let handle = handle.clone();
        EventListener::new(&ctx.document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(key) = GalleryKey::from_key(&event.key()) {
                handle.key(key);
            }
        })
    };
    listeners.push(on_key);

    listeners
}

fn card_listeners(ctx: &PageContext, handle: &GalleryHandle) -> Vec<EventListener> {
    ctx.query_all_html(CARD_SELECTOR)
        .into_iter()
        .filter_map(|card| {
            let raw = card.get_attribute("data-videos").unwrap_or_default();
            let sources = match Playlist::from_json(&raw, "") {
                Ok(playlist) => playlist.sources().to_vec(),
                Err(e) => {
                    tracing::warn!(error = %e, data = %raw, "skipping card with unusable playlist");
                    return None;
                }
            };

            set_style(&card, "cursor", "pointer");

            let handle = handle.clone();
            let target = card.clone();
            Some(EventListener::new(&target, "click", move |_| {
                let label = query_within::<Element>(&card, TITLE_SELECTOR)
                    .and_then(|title| title.text_content())
                    .unwrap_or_default();
                match Playlist::new(sources.clone(), label.trim()) {
                    Ok(playlist) => handle.open(playlist),
                    Err(e) => tracing::warn!(error = %e, "card playlist rejected"),
                }
            }))
        })
        .collect()
}

fn preview_listeners(ctx: &PageContext) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for card in ctx.query_all(PREVIEW_CARD_SELECTOR) {
        let Some(preview) = query_within::<HtmlVideoElement>(&card, PREVIEW_SELECTOR) else {
            continue;
        };

        let playing = preview.clone();
        listeners.push(EventListener::new(&card, "mouseenter", move |_| {
            playing.set_current_time(0.0);
            play_quietly(&playing);
        }));
        listeners.push(EventListener::new(&card, "mouseleave", move |_| {
            stop_and_rewind(&preview);
        }));
    }
    listeners
}
