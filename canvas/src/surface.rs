//! Freehand drawing surface.
//!
//! `DrawingSurface` turns begin/extend/end calls into stroked segments on a
//! [`Context2d`] backend. It owns the backend once attached, remembers the
//! stroke configuration so it survives backing resizes, and tracks the single
//! open stroke.
//!
//! All drawing commands are issued in logical (CSS pixel) coordinates. The
//! device pixel ratio is applied as a context scale exactly once per backing
//! change: the backing is always resized first, which resets the transform,
//! and only then scaled.
//!
//! Calls made before [`DrawingSurface::attach`] are silent no-ops, as are
//! extends and ends with no open stroke.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use tracing::{debug, trace};

use crate::backend::{CompositeMode, Context2d, LineCap, LineJoin};
use crate::color::Color;
use crate::consts::BRUSH_DEFAULT_WIDTH;
use crate::geom::{Point, Viewport};
use crate::tool::Tool;

/// Stroke parameters applied to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeConfig {
    pub color: Color,
    pub width: f64,
    pub composite: CompositeMode,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self { color: Color::BLACK, width: BRUSH_DEFAULT_WIDTH, composite: CompositeMode::SourceOver }
    }
}

/// One continuous line from pointer-down to pointer-up or leave.
///
/// Parameters are captured when the stroke begins; reconfiguring the surface
/// mid-stroke does not change them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    config: StrokeConfig,
}

impl Stroke {
    fn new(start: Point, config: StrokeConfig) -> Self {
        Self { points: vec![start], config }
    }

    /// Recorded points in logical coordinates, oldest first.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn config(&self) -> StrokeConfig {
        self.config
    }

    fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Drawing surface bound to a 2D backend.
pub struct DrawingSurface<B: Context2d> {
    backend: Option<B>,
    viewport: Viewport,
    config: StrokeConfig,
    current: Option<Stroke>,
    sealed: u64,
}

impl<B: Context2d> Default for DrawingSurface<B> {
    fn default() -> Self {
        Self { backend: None, viewport: Viewport::default(), config: StrokeConfig::default(), current: None, sealed: 0 }
    }
}

impl<B: Context2d> DrawingSurface<B> {
    /// An uninitialized surface. Drawing is a no-op until [`Self::attach`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a backend and size it to `viewport`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from sizing or state application.
    pub fn attach(&mut self, backend: B, viewport: Viewport) -> Result<(), B::Error> {
        debug!(width = viewport.width_css, height = viewport.height_css, dpr = viewport.dpr, "drawing surface attached");
        self.current = None;
        self.backend = Some(backend);
        self.rebuild_backing(viewport)
    }

    /// Update stroke parameters for subsequent strokes.
    ///
    /// The open stroke, if any, keeps the parameters it began with.
    ///
    /// # Errors
    ///
    /// Propagates backend failures when pushing the new state.
    pub fn configure(&mut self, color: Color, width: f64, tool: Tool) -> Result<(), B::Error> {
        self.config = StrokeConfig { color, width, composite: tool.composite() };
        match self.backend.as_mut() {
            Some(backend) => apply_config(backend, self.config),
            None => Ok(()),
        }
    }

    /// Open a new stroke at `point`. Any stroke still open is sealed first.
    ///
    /// # Errors
    ///
    /// Propagates backend path failures.
    pub fn begin_stroke(&mut self, point: Point) -> Result<(), B::Error> {
        if self.backend.is_none() {
            trace!("begin_stroke ignored: surface not initialized");
            return Ok(());
        }
        if self.current.is_some() {
            self.end_stroke();
        }
        let config = self.config;
        if let Some(backend) = self.backend.as_mut() {
            apply_config(backend, config)?;
            backend.begin_path();
            backend.move_to(point)?;
        }
        self.current = Some(Stroke::new(point, config));
        Ok(())
    }

    /// Draw a segment from the last recorded point to `point`.
    ///
    /// # Errors
    ///
    /// Propagates backend path or stroke failures.
    pub fn extend_stroke(&mut self, point: Point) -> Result<(), B::Error> {
        let surface_config = self.config;
        let (Some(stroke), Some(backend)) = (self.current.as_mut(), self.backend.as_mut()) else {
            return Ok(());
        };
        let Some(last) = stroke.last() else {
            return Ok(());
        };
        let reconfigured = stroke.config != surface_config;
        if reconfigured {
            apply_config(backend, stroke.config)?;
        }
        backend.begin_path();
        backend.move_to(last)?;
        backend.line_to(point)?;
        backend.stroke()?;
        stroke.points.push(point);
        if reconfigured {
            apply_config(backend, surface_config)?;
        }
        Ok(())
    }

    /// Close and seal the open stroke.
    pub fn end_stroke(&mut self) {
        if self.current.take().is_none() {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.close_path();
        }
        self.sealed += 1;
    }

    /// Rebuild the backing store for a new on-screen box or pixel ratio.
    ///
    /// Pixels drawn before the resize are not preserved. The open stroke is
    /// sealed since its path lived on the old backing.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from sizing or state application.
    pub fn handle_resize(&mut self, viewport: Viewport) -> Result<(), B::Error> {
        if self.backend.is_none() {
            trace!("handle_resize ignored: surface not initialized");
            return Ok(());
        }
        debug!(width = viewport.width_css, height = viewport.height_css, dpr = viewport.dpr, "drawing surface resized");
        self.end_stroke();
        self.rebuild_backing(viewport)
    }

    fn rebuild_backing(&mut self, viewport: Viewport) -> Result<(), B::Error> {
        self.viewport = viewport;
        let config = self.config;
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };
        let (w, h) = viewport.backing_size();
        backend.set_backing_size(w, h)?;
        let dpr = viewport.effective_dpr();
        backend.scale(dpr, dpr)?;
        backend.set_line_cap(LineCap::Round);
        backend.set_line_join(LineJoin::Round);
        apply_config(backend, config)
    }

    // --- Queries ---

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// The open stroke, if any.
    #[must_use]
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Number of strokes sealed since construction.
    #[must_use]
    pub fn sealed_strokes(&self) -> u64 {
        self.sealed
    }

    #[must_use]
    pub fn config(&self) -> StrokeConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    /// Mutable backend access for host-side work such as painting a background.
    pub fn backend_mut(&mut self) -> Option<&mut B> {
        self.backend.as_mut()
    }
}

fn apply_config<B: Context2d>(backend: &mut B, config: StrokeConfig) -> Result<(), B::Error> {
    backend.set_composite(config.composite)?;
    backend.set_stroke_color(backend_color(config));
    backend.set_line_width(config.width);
    Ok(())
}

/// Color handed to the backend. Destination-out scales by source alpha, so
/// the eraser always strokes opaque to clear fully.
fn backend_color(config: StrokeConfig) -> Color {
    match config.composite {
        CompositeMode::DestinationOut => Color { a: 255, ..config.color },
        CompositeMode::SourceOver => config.color,
    }
}
