//! Frame scheduling.
//!
//! [`ScrollScheduler`] owns the single window scroll listener and runs every
//! scroll-driven controller at most once per animation frame, however many
//! scroll events arrive in between. [`frame_loop`] drives the effects that
//! animate every frame on their own.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use showreel_core::{FrameThrottle, ShowreelResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::context::dom_err;

type Subscriber = Box<dyn FnMut(f64)>;

struct SchedulerInner {
    throttle: FrameThrottle,
    // Kept until the next request replaces it; dropping it from inside its
    // own callback would free the running closure.
    frame: Option<AnimationFrame>,
    subscribers: Vec<Subscriber>,
}

/// Coalesces scroll events into one update per frame.
#[derive(Clone)]
pub struct ScrollScheduler {
    window: Window,
    inner: Rc<RefCell<SchedulerInner>>,
}

impl ScrollScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            inner: Rc::new(RefCell::new(SchedulerInner {
                throttle: FrameThrottle::new(),
                frame: None,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Run `update` with the scroll offset now and on every throttled frame.
    pub fn subscribe(&self, mut update: impl FnMut(f64) + 'static) {
        update(self.window.scroll_y().unwrap_or(0.0));
        self.inner.borrow_mut().subscribers.push(Box::new(update));
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Attach the window scroll listener. The scheduler stops when the
    /// returned listener is dropped.
    pub fn listen(&self) -> EventListener {
        let window = self.window.clone();
        let inner = Rc::downgrade(&self.inner);
        EventListener::new(&self.window, "scroll", move |_| {
            schedule(&window, &inner);
        })
    }
}

fn schedule(window: &Window, weak: &Weak<RefCell<SchedulerInner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut state = inner.borrow_mut();
    if !state.throttle.request() {
        return;
    }

    let window = window.clone();
    let weak = weak.clone();
    state.frame = Some(request_animation_frame(move |_| flush(&window, &weak)));
}

fn flush(window: &Window, weak: &Weak<RefCell<SchedulerInner>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let mut subscribers = {
        let mut state = inner.borrow_mut();
        state.throttle.complete();
        std::mem::take(&mut state.subscribers)
    };

    for update in subscribers.iter_mut() {
        update(scroll_y);
    }

    let mut state = inner.borrow_mut();
    subscribers.append(&mut state.subscribers);
    state.subscribers = subscribers;
}

/// Call `tick` on every animation frame until it returns false.
pub fn frame_loop(window: &Window, mut tick: impl FnMut() -> bool + 'static) -> ShowreelResult<()> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::clone(&slot);
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !tick() {
            // Release the closure once the loop is over.
            handle.borrow_mut().take();
            return;
        }
        if let Some(callback) = handle.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                tracing::debug!(error = ?e, "frame request rejected");
            }
        }
    }) as Box<dyn FnMut()>));

    let requested = match slot.borrow().as_ref() {
        Some(callback) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(|_| ())
            .map_err(dom_err),
        None => Ok(()),
    };
    requested
}
