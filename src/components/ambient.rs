//! Decorative effects: floating hero elements, background glow parallax
//! and play button feedback.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use showreel_core::ambient::{float_offset, glow_offset};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::context::{set_style, PageContext};
use crate::scheduler::ScrollScheduler;

pub const HERO_SELECTOR: &str = ".hero-visual";
pub const FLOAT_SELECTOR: &str = ".float-element";
pub const GLOW_SELECTOR: &str = ".bg-glow";
pub const PLAY_BUTTON_SELECTOR: &str = ".play-button, .play-btn";

const PULSE_ANIMATION: &str = "pulse 0.3s ease-out";
const PULSE_RESTART_MS: u32 = 10;

fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

fn translate_y(y: f64) -> String {
    format!("translateY({y}px)")
}

/// The mounted ambient effects.
pub struct Ambient {
    _listeners: Vec<EventListener>,
}

impl Ambient {
    pub fn mount(ctx: &PageContext, scheduler: &ScrollScheduler) -> Self {
        let mut listeners = Vec::new();
        listeners.extend(floating(ctx));
        listeners.extend(play_buttons(ctx));
        glow(ctx, scheduler);
        Self {
            _listeners: listeners,
        }
    }
}

fn floating(ctx: &PageContext) -> Option<EventListener> {
    ctx.query(HERO_SELECTOR)?;
    let elements = ctx.query_all_html(FLOAT_SELECTOR);
    if elements.is_empty() {
        return None;
    }

    let page = ctx.clone();
    Some(EventListener::new(&ctx.document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (width, height) = page.viewport();
        for (index, el) in elements.iter().enumerate() {
            let (x, y) = float_offset(
                event.client_x() as f64,
                event.client_y() as f64,
                width,
                height,
                index,
                page.config.float_speed_step,
            );
            set_style(el, "transform", &translate(x, y));
        }
    }))
}

fn glow(ctx: &PageContext, scheduler: &ScrollScheduler) {
    let glows = ctx.query_all_html(GLOW_SELECTOR);
    if glows.is_empty() {
        return;
    }
    let step = ctx.config.glow_speed_step;
    scheduler.subscribe(move |scroll_y| {
        for (index, el) in glows.iter().enumerate() {
            set_style(el, "transform", &translate_y(glow_offset(scroll_y, index, step)));
        }
    });
}

fn play_buttons(ctx: &PageContext) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for button in ctx.query_all_html(PLAY_BUTTON_SELECTOR) {
        let hovered = button.clone();
        listeners.push(EventListener::new(&button, "mouseenter", move |_| {
            set_style(&hovered, "transform", "scale(1.1)");
        }));

        let left = button.clone();
        listeners.push(EventListener::new(&button, "mouseleave", move |_| {
            set_style(&left, "transform", "scale(1)");
        }));

        let pulsed = button.clone();
        listeners.push(EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                restart_pulse(&pulsed);
            },
        ));
    }
    listeners
}

fn restart_pulse(button: &HtmlElement) {
    set_style(button, "animation", "none");
    let button = button.clone();
    Timeout::new(PULSE_RESTART_MS, move || {
        set_style(&button, "animation", PULSE_ANIMATION);
    })
    .forget();
}
