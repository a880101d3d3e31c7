//! Decorative effects: mouse and scroll parallax, cursor trail, counters and
//! the typewriter.

use std::collections::VecDeque;

/// Translation of the `index`th floating element for a pointer at
/// (`client_x`, `client_y`) in a `width` x `height` viewport.
pub fn float_offset(
    client_x: f64,
    client_y: f64,
    width: f64,
    height: f64,
    index: usize,
    speed_step: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let speed = (index + 1) as f64 * speed_step;
    let x = (client_x / width - 0.5) * speed;
    let y = (client_y / height - 0.5) * speed;
    (x, y)
}

/// Vertical shift of the `index`th background glow at `scroll_y`.
pub fn glow_offset(scroll_y: f64, index: usize, speed_step: f64) -> f64 {
    scroll_y * (index + 1) as f64 * speed_step
}

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounded pointer history, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTrail {
    capacity: usize,
    positions: VecDeque<Point>,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            positions: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Record this frame's pointer position.
    pub fn push(&mut self, point: Point) {
        self.positions.push_front(point);
        self.positions.truncate(self.capacity);
    }

    /// Where dot `index` sits, if the history reaches that far.
    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(index).copied()
    }
}

/// Size and opacity of trail dot `index`; dots shrink and fade down the tail.
pub fn trail_dot(index: usize) -> (f64, f64) {
    let i = index as f64;
    (12.0 - i * 0.5, 1.0 - i * 0.05)
}

/// Inline style for trail dot `index`.
pub fn trail_dot_css(index: usize) -> String {
    let (size, opacity) = trail_dot(index);
    format!(
        "position: fixed; width: {size}px; height: {size}px; \
         background: linear-gradient(135deg, #00d4ff, #3d6cb9); border-radius: 50%; \
         pointer-events: none; z-index: 9999; opacity: {opacity}; \
         transform: translate(-50%, -50%); transition: transform 0.1s ease-out;"
    )
}

/// Count-up animation toward an integer target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    value: f64,
    target: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    /// Reach `target` in roughly `duration_ms`, assuming `frame_ms` per frame.
    pub fn new(target: f64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = if frame_ms > 0.0 { duration_ms / frame_ms } else { 0.0 };
        let increment = if frames > 0.0 { target / frames } else { target };
        Self {
            value: 0.0,
            target,
            increment,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame and return the text to show. After the final frame
    /// this keeps returning the target.
    pub fn step(&mut self) -> String {
        if !self.done {
            self.value += self.increment;
            if self.value < self.target && self.increment > 0.0 {
                return format!("{}", self.value.floor());
            }
            self.done = true;
        }
        format!("{}", self.target)
    }
}

/// Reveals a string one character at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }
}

impl Iterator for Typewriter {
    type Item = String;

    /// The next visible prefix, one more character than the last.
    fn next(&mut self) -> Option<String> {
        let ch = self.text[self.shown..].chars().next()?;
        self.shown += ch.len_utf8();
        Some(self.text[..self.shown].to_string())
    }
}
