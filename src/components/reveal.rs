//! Scroll reveal.
//!
//! Every reveal target gets the `reveal` class up front and `active` the
//! first time it scrolls into view. Grid cards additionally get a staggered
//! transition delay so a row animates in sequence.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use showreel_core::reveal::{stagger_delay, REVEAL_SELECTOR, STAGGER_GROUPS};
use showreel_core::{RevealTracker, ShowreelResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::context::{dom_err, set_class, set_style, PageContext};

const INDEX_ATTR: &str = "data-reveal-index";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// The mounted reveal observer. Disconnects on drop.
pub struct Reveal {
    tracker: Rc<RefCell<RevealTracker>>,
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Reveal {
    pub fn mount(ctx: &PageContext) -> ShowreelResult<Option<Self>> {
        apply_stagger(ctx);

        let targets = ctx.query_all(REVEAL_SELECTOR);
        if targets.is_empty() {
            tracing::debug!(selector = REVEAL_SELECTOR, "reveal disabled");
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));
        let callback = observer_callback(Rc::clone(&tracker));

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
        options.set_root_margin(&ctx.config.reveal_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(dom_err)?;

        for (index, target) in targets.iter().enumerate() {
            set_class(target, "reveal", true);
            target
                .set_attribute(INDEX_ATTR, &index.to_string())
                .map_err(dom_err)?;
            observer.observe(target);
        }

        tracing::debug!(targets = targets.len(), "reveal observing");
        Ok(Some(Self {
            tracker,
            observer,
            _callback: callback,
        }))
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_callback(tracker: Rc<RefCell<RevealTracker>>) -> ObserverCallback {
    Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = target_index(&target) else {
                continue;
            };
            if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                set_class(&target, "active", true);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
}

fn target_index(target: &Element) -> Option<usize> {
    target.get_attribute(INDEX_ATTR)?.parse().ok()
}

fn apply_stagger(ctx: &PageContext) {
    for group in STAGGER_GROUPS {
        for (index, el) in ctx.query_all_html(group).iter().enumerate() {
            set_style(el, "transition-delay", &stagger_delay(index, ctx.config.stagger_step_secs));
        }
    }
}
