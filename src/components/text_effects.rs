//! Count-up numbers and typewriter text.

use gloo::timers::callback::Timeout;
use showreel_core::ambient::{CounterAnimation, Typewriter};
use showreel_core::ShowreelResult;
use web_sys::{HtmlElement, Window};

use crate::scheduler::frame_loop;

/// Count `element`'s text up from zero to `target`, one step per frame.
pub fn animate_counter(
    window: &Window,
    element: HtmlElement,
    target: f64,
    duration_ms: f64,
    frame_ms: f64,
) -> ShowreelResult<()> {
    let mut counter = CounterAnimation::new(target, duration_ms, frame_ms);
    frame_loop(window, move || {
        element.set_text_content(Some(&counter.step()));
        !counter.is_done()
    })
}

/// Clear `element` and type `text` into it one character every `speed_ms`.
pub fn type_writer(element: HtmlElement, text: &str, speed_ms: u32) {
    element.set_text_content(Some(""));
    type_next(element, Typewriter::new(text), speed_ms);
}

fn type_next(element: HtmlElement, mut typewriter: Typewriter, speed_ms: u32) {
    let Some(prefix) = typewriter.next() else {
        return;
    };
    element.set_text_content(Some(&prefix));
    Timeout::new(speed_ms, move || type_next(element, typewriter, speed_ms)).forget();
}
