//! Cursor trail.
//!
//! A fixed set of dots follows the pointer: every frame the latest pointer
//! position enters the front of the history and dot `i` moves to the `i`th
//! most recent position.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use showreel_core::ambient::{trail_dot_css, CursorTrail, Point};
use showreel_core::{ShowreelError, ShowreelResult};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::context::{dom_err, set_style, PageContext};
use crate::scheduler::frame_loop;

const DOT_CLASS: &str = "cursor-trail";

/// The running trail. Stops and removes its dots on drop.
pub struct CursorTrailEffect {
    running: Rc<Cell<bool>>,
    dots: Vec<HtmlElement>,
    _pointer: EventListener,
}

impl CursorTrailEffect {
    pub fn start(ctx: &PageContext) -> ShowreelResult<Self> {
        let body = ctx
            .body()
            .ok_or_else(|| ShowreelError::MissingElement("body".to_string()))?;

        let mut dots = Vec::with_capacity(ctx.config.trail_length);
        for index in 0..ctx.config.trail_length {
            let dot: HtmlElement = ctx
                .document
                .create_element("div")
                .map_err(dom_err)?
                .dyn_into()
                .map_err(|_| ShowreelError::Dom("created div is not an HtmlElement".to_string()))?;
            dot.set_class_name(DOT_CLASS);
            dot.style().set_css_text(&trail_dot_css(index));
            body.append_child(&dot).map_err(dom_err)?;
            dots.push(dot);
        }

        let pointer = Rc::new(Cell::new(Point::default()));
        let on_move = {
            let pointer = Rc::clone(&pointer);
            EventListener::new(&ctx.document, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    pointer.set(Point {
                        x: event.client_x() as f64,
                        y: event.client_y() as f64,
                    });
                }
            })
        };

        let running = Rc::new(Cell::new(true));
        let mut trail = CursorTrail::new(ctx.config.trail_length);
        let frame_dots = dots.clone();
        let alive = Rc::clone(&running);
        frame_loop(&ctx.window, move || {
            if !alive.get() {
                return false;
            }
            trail.push(pointer.get());
            for (index, dot) in frame_dots.iter().enumerate() {
                if let Some(point) = trail.position(index) {
                    set_style(dot, "left", &format!("{}px", point.x));
                    set_style(dot, "top", &format!("{}px", point.y));
                }
            }
            true
        })?;

        tracing::debug!(dots = dots.len(), "cursor trail started");
        Ok(Self {
            running,
            dots,
            _pointer: on_move,
        })
    }
}

impl Drop for CursorTrailEffect {
    fn drop(&mut self) {
        self.running.set(false);
        for dot in &self.dots {
            dot.remove();
        }
    }
}
