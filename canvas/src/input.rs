//! Input model: pointer events and the stroke gesture state machine.
//!
//! `PointerEvent` is what the host forwards from DOM mouse/touch events, with
//! coordinates already in the surface's CSS pixel space (`offsetX/offsetY`).
//! `StrokeGesture` tracks whether a primary-button drag is in progress.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    /// Left mouse button (or a single touch).
    #[default]
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Which pointer transition occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The pointer left the surface; treated exactly like `Up`.
    Leave,
}

/// A pointer event in surface-local CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub point: Point,
    pub button: Button,
}

impl PointerEvent {
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Down, point: Point::new(x, y), button: Button::Primary }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Move, point: Point::new(x, y), button: Button::Primary }
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Up, point: Point::new(x, y), button: Button::Primary }
    }

    #[must_use]
    pub fn leave(x: f64, y: f64) -> Self {
        Self { kind: PointerKind::Leave, point: Point::new(x, y), button: Button::Primary }
    }

    #[must_use]
    pub fn with_button(self, button: Button) -> Self {
        Self { button, ..self }
    }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeGesture {
    /// No drag in progress.
    #[default]
    Idle,
    /// A primary-button drag is drawing a stroke.
    Drawing,
}

/// What the gesture machine asks the surface to do for one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeCommand {
    Begin(Point),
    Extend(Point),
    End,
    Ignore,
}

impl StrokeGesture {
    /// Advance the gesture for `event` and return the surface command it implies.
    pub fn step(&mut self, event: PointerEvent) -> StrokeCommand {
        match (*self, event.kind) {
            (_, PointerKind::Down) if event.button == Button::Primary => {
                *self = Self::Drawing;
                StrokeCommand::Begin(event.point)
            }
            (Self::Drawing, PointerKind::Move) => StrokeCommand::Extend(event.point),
            (Self::Drawing, PointerKind::Up | PointerKind::Leave) => {
                *self = Self::Idle;
                StrokeCommand::End
            }
            _ => StrokeCommand::Ignore,
        }
    }
}
