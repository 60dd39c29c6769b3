//! The 2D context seam the drawing surface renders through.
//!
//! [`Context2d`] mirrors the subset of the HTML canvas 2D API the surface
//! needs. Implementations: [`crate::raster::Raster`] (software, used natively
//! and in tests) and [`crate::web::HtmlCanvas`] (browser).
//!
//! Contract shared by all backends: [`Context2d::set_backing_size`] resets the
//! transform to identity and every stroke parameter to its default (black,
//! width 1, butt cap, miter join, source-over), the same way assigning
//! `canvas.width` does in the browser. Callers must re-apply scale and stroke
//! state after every backing change.

use crate::color::Color;
use crate::geom::Point;

/// Shape drawn at the open ends of a stroked segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Shape drawn where two segments of a path meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// How newly stroked pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint the stroke color over existing pixels with normal alpha blending.
    #[default]
    SourceOver,
    /// Remove existing pixels under the stroke, leaving transparency.
    DestinationOut,
}

impl CompositeMode {
    /// Name used by `globalCompositeOperation`.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::DestinationOut => "destination-out",
        }
    }
}

/// Minimal stateful 2D drawing context.
pub trait Context2d {
    type Error;

    /// Resize the backing store in device pixels; resets transform and stroke state.
    fn set_backing_size(&mut self, width_px: u32, height_px: u32) -> Result<(), Self::Error>;

    /// Post-multiply the current transform by a scale.
    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), Self::Error>;

    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), Self::Error>;

    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point) -> Result<(), Self::Error>;
    fn line_to(&mut self, point: Point) -> Result<(), Self::Error>;

    /// Stroke the current path with the current stroke state.
    fn stroke(&mut self) -> Result<(), Self::Error>;

    fn close_path(&mut self);
}
