//! Scripted pen for the terminal driver.
//!
//! There is no mouse in a terminal, so the driver moves a pen along a fixed
//! set of shapes, one pointer event per tick. The events go through the same
//! [`CanvasEngine`](canvas::engine::CanvasEngine) path a browser would use.

#[cfg(test)]
#[path = "autodraw_test.rs"]
mod autodraw_test;

use std::f64::consts::TAU;

use canvas::geom::{Point, Viewport};
use canvas::input::PointerEvent;

const CIRCLE_SEGMENTS: usize = 16;

/// Cycles through the scripted strokes: `down`, `move`s, then `up`.
#[derive(Debug, Clone)]
pub struct AutoDraw {
    strokes: Vec<Vec<Point>>,
    stroke: usize,
    index: usize,
    last: Point,
}

impl AutoDraw {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self { strokes: script(viewport), stroke: 0, index: 0, last: Point::new(0.0, 0.0) }
    }

    /// Start again from the first stroke.
    pub fn reset(&mut self) {
        self.stroke = 0;
        self.index = 0;
    }

    /// The next pointer event in the script.
    pub fn next_event(&mut self) -> PointerEvent {
        let points = self.strokes.get(self.stroke).map_or(&[][..], Vec::as_slice);
        let event = match points.get(self.index) {
            Some(&p) if self.index == 0 => PointerEvent::down(p.x, p.y),
            Some(&p) => PointerEvent::moved(p.x, p.y),
            None => PointerEvent::up(self.last.x, self.last.y),
        };
        if let Some(&p) = points.get(self.index) {
            self.last = p;
            self.index += 1;
        } else {
            self.index = 0;
            self.stroke = (self.stroke + 1) % self.strokes.len().max(1);
        }
        event
    }

    /// Where the pen was last placed, for lifting it off cleanly.
    #[must_use]
    pub fn last_point(&self) -> Point {
        self.last
    }

    #[cfg(test)]
    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }
}

/// A circle on the left, a square on the right and a baseline under both.
fn script(viewport: Viewport) -> Vec<Vec<Point>> {
    let w = viewport.width_css;
    let h = viewport.height_css;
    let r = w.min(h) * 0.3;

    #[allow(clippy::cast_precision_loss)]
    let circle = (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
            Point::new(w * 0.3 + r * t.cos(), h * 0.45 + r * t.sin())
        })
        .collect();

    let square = vec![
        Point::new(w * 0.6, h * 0.2),
        Point::new(w * 0.85, h * 0.2),
        Point::new(w * 0.85, h * 0.7),
        Point::new(w * 0.6, h * 0.7),
        Point::new(w * 0.6, h * 0.2),
    ];

    let baseline = vec![Point::new(w * 0.1, h * 0.9), Point::new(w * 0.5, h * 0.9), Point::new(w * 0.9, h * 0.9)];

    vec![circle, square, baseline]
}
