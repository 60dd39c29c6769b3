use tracing::trace;

use crate::backend::Context2d;
use crate::geom::Viewport;
use crate::input::{PointerEvent, StrokeCommand, StrokeGesture};
use crate::surface::DrawingSurface;
use crate::tool::ToolSettings;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Pointer-driven drawing engine: a surface plus the gesture that feeds it.
///
/// The host forwards DOM pointer events and toolbar changes; the engine has
/// no knowledge of game state.
pub struct CanvasEngine<B: Context2d> {
    pub surface: DrawingSurface<B>,
    gesture: StrokeGesture,
}

impl<B: Context2d> Default for CanvasEngine<B> {
    fn default() -> Self {
        Self { surface: DrawingSurface::new(), gesture: StrokeGesture::default() }
    }
}

impl<B: Context2d> CanvasEngine<B> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the backend and size it to `viewport`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn attach(&mut self, backend: B, viewport: Viewport) -> Result<(), B::Error> {
        self.gesture = StrokeGesture::Idle;
        self.surface.attach(backend, viewport)
    }

    /// Push toolbar settings to the surface.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn set_settings(&mut self, settings: &ToolSettings) -> Result<(), B::Error> {
        self.surface.configure(settings.color, settings.width, settings.tool)
    }

    /// Handle a window resize or pixel-ratio change.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), B::Error> {
        self.gesture = StrokeGesture::Idle;
        self.surface.handle_resize(viewport)
    }

    /// Dispatch one pointer event and return the command it produced.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from drawing.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Result<StrokeCommand, B::Error> {
        if !self.surface.is_initialized() {
            trace!(?event, "pointer event ignored: surface not initialized");
            return Ok(StrokeCommand::Ignore);
        }
        let command = self.gesture.step(event);
        match command {
            StrokeCommand::Begin(p) => self.surface.begin_stroke(p)?,
            StrokeCommand::Extend(p) => self.surface.extend_stroke(p)?,
            StrokeCommand::End => self.surface.end_stroke(),
            StrokeCommand::Ignore => {}
        }
        Ok(command)
    }

    #[must_use]
    pub fn gesture(&self) -> StrokeGesture {
        self.gesture
    }
}
