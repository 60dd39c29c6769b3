//! Software RGBA backend.
//!
//! `Raster` keeps its own pixel buffer and a minimal scale-only transform. It
//! is the native stand-in for a browser canvas: the same [`Context2d`] calls
//! produce the same stroke geometry, minus antialiasing. A device pixel is
//! covered by a segment when its center lies within half the device-space
//! line width of it; each `stroke()` call composites every covered pixel
//! exactly once, so overlapping segments of one path never double-blend.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::backend::{CompositeMode, Context2d, LineCap, LineJoin};
use crate::color::Color;
use crate::consts::BACKEND_DEFAULT_LINE_WIDTH;
use crate::geom::Point;

/// Error returned by [`Raster`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// A coordinate or scale factor was NaN or infinite.
    #[error("non-finite value passed to {op}")]
    NonFinite { op: &'static str },
    /// The requested backing store exceeds [`MAX_PIXELS`].
    #[error("backing store {width}x{height} exceeds {} pixels", MAX_PIXELS)]
    TooLarge { width: u32, height: u32 },
}

/// Largest backing store a raster will allocate (4096 x 4096).
pub const MAX_PIXELS: usize = 1 << 24;

#[derive(Debug, Clone, Default)]
struct Subpath {
    /// Points in device space.
    points: Vec<Point>,
    closed: bool,
}

/// Stroke parameters; reset together on every backing change.
#[derive(Debug, Clone, Copy)]
struct StrokeState {
    sx: f64,
    sy: f64,
    line_width: f64,
    color: Color,
    cap: LineCap,
    join: LineJoin,
    composite: CompositeMode,
}

impl Default for StrokeState {
    fn default() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            line_width: BACKEND_DEFAULT_LINE_WIDTH,
            color: Color::BLACK,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            composite: CompositeMode::SourceOver,
        }
    }
}

/// In-memory RGBA raster implementing [`Context2d`].
#[derive(Debug, Clone, Default)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    state: StrokeState,
    path: Vec<Subpath>,
}

impl Raster {
    /// A fully transparent raster of the given device size.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::TooLarge`] past [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let mut raster = Self::default();
        raster.resize(width, height)?;
        Ok(raster)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len <= MAX_PIXELS)
            .ok_or(RasterError::TooLarge { width, height })?;
        self.width = width;
        self.height = height;
        self.pixels = vec![Color::TRANSPARENT; len];
        self.state = StrokeState::default();
        self.path.clear();
        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at device coordinates, or `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Row-major pixel buffer.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Number of pixels with non-zero alpha.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }

    /// Overwrite every pixel, e.g. to lay down a background before drawing.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Current transform as `(sx, sy)`.
    #[must_use]
    pub fn transform_scale(&self) -> (f64, f64) {
        (self.state.sx, self.state.sy)
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    #[must_use]
    pub fn stroke_color(&self) -> Color {
        self.state.color
    }

    #[must_use]
    pub fn line_cap(&self) -> LineCap {
        self.state.cap
    }

    #[must_use]
    pub fn line_join(&self) -> LineJoin {
        self.state.join
    }

    #[must_use]
    pub fn composite(&self) -> CompositeMode {
        self.state.composite
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn to_device(&self, point: Point, op: &'static str) -> Result<Point, RasterError> {
        if !point.is_finite() {
            return Err(RasterError::NonFinite { op });
        }
        Ok(Point::new(point.x * self.state.sx, point.y * self.state.sy))
    }

    fn segments(&self) -> Vec<(Point, Point)> {
        let mut out = Vec::new();
        for sub in &self.path {
            match sub.points.as_slice() {
                // A lone move_to strokes nothing.
                [] | [_] => {}
                pts => {
                    out.extend(pts.iter().copied().zip(pts.iter().copied().skip(1)));
                    if sub.closed {
                        if let (Some(first), Some(last)) = (pts.first(), pts.last()) {
                            out.push((*last, *first));
                        }
                    }
                }
            }
        }
        out
    }

    /// Rasterize the union of `segments` into a coverage mask over the full raster.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn coverage(&self, segments: &[(Point, Point)], half_width: f64) -> Vec<bool> {
        let mut mask = vec![false; self.pixels.len()];
        if self.width == 0 || self.height == 0 || half_width <= 0.0 {
            return mask;
        }
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        for &(a, b) in segments {
            let pad = half_width + 1.0;
            let x0 = (a.x.min(b.x) - pad).floor().clamp(0.0, max_x) as u32;
            let x1 = (a.x.max(b.x) + pad).ceil().clamp(0.0, max_x) as u32;
            let y0 = (a.y.min(b.y) - pad).floor().clamp(0.0, max_y) as u32;
            let y1 = (a.y.max(b.y) + pad).ceil().clamp(0.0, max_y) as u32;
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                    if covers(self.state.cap, a, b, center, half_width)
                        && let Some(hit) = mask.get_mut(self.index(x, y))
                    {
                        *hit = true;
                    }
                }
            }
        }
        mask
    }
}

/// Whether a segment stroked with `cap` covers the pixel center `c`.
fn covers(cap: LineCap, a: Point, b: Point, c: Point, hw: f64) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let (px, py) = (c.x - a.x, c.y - a.y);

    if len_sq == 0.0 {
        // Zero-length segments only show up with round caps, as a dot.
        return cap == LineCap::Round && px * px + py * py <= hw * hw;
    }

    let t = (px * dx + py * dy) / len_sq;
    match cap {
        LineCap::Round => {
            let t = t.clamp(0.0, 1.0);
            let (ex, ey) = (c.x - (a.x + t * dx), c.y - (a.y + t * dy));
            ex * ex + ey * ey <= hw * hw
        }
        LineCap::Butt | LineCap::Square => {
            let ext = if cap == LineCap::Square { hw / len_sq.sqrt() } else { 0.0 };
            if t < -ext || t > 1.0 + ext {
                return false;
            }
            let cross = px * dy - py * dx;
            cross * cross <= hw * hw * len_sq
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn composite_pixel(mode: CompositeMode, src: Color, dst: Color) -> Color {
    let sa = f64::from(src.a) / 255.0;
    let da = f64::from(dst.a) / 255.0;
    match mode {
        CompositeMode::SourceOver => {
            let oa = sa + da * (1.0 - sa);
            if oa <= 0.0 {
                return Color::TRANSPARENT;
            }
            let mix = |s: u8, d: u8| to_u8((f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / oa);
            Color { r: mix(src.r, dst.r), g: mix(src.g, dst.g), b: mix(src.b, dst.b), a: to_u8(oa * 255.0) }
        }
        CompositeMode::DestinationOut => {
            let a = to_u8(da * (1.0 - sa) * 255.0);
            if a == 0 { Color::TRANSPARENT } else { Color { a, ..dst } }
        }
    }
}

impl Context2d for Raster {
    type Error = RasterError;

    fn set_backing_size(&mut self, width_px: u32, height_px: u32) -> Result<(), Self::Error> {
        self.resize(width_px, height_px)
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), Self::Error> {
        if !sx.is_finite() || !sy.is_finite() {
            return Err(RasterError::NonFinite { op: "scale" });
        }
        self.state.sx *= sx;
        self.state.sy *= sy;
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.join = join;
    }

    fn set_line_width(&mut self, width: f64) {
        // Same as canvas: invalid widths leave the current one in place.
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), Self::Error> {
        self.state.composite = mode;
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, point: Point) -> Result<(), Self::Error> {
        let p = self.to_device(point, "move_to")?;
        self.path.push(Subpath { points: vec![p], closed: false });
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> Result<(), Self::Error> {
        let p = self.to_device(point, "line_to")?;
        match self.path.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            // With no open subpath, line_to behaves like move_to.
            _ => self.path.push(Subpath { points: vec![p], closed: false }),
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        let segments = self.segments();
        if segments.is_empty() {
            return Ok(());
        }
        let scale = (self.state.sx.abs() + self.state.sy.abs()) * 0.5;
        let half_width = self.state.line_width * scale * 0.5;
        let mask = self.coverage(&segments, half_width);
        let (mode, src) = (self.state.composite, self.state.color);
        for (pixel, covered) in self.pixels.iter_mut().zip(mask) {
            if covered {
                *pixel = composite_pixel(mode, src, *pixel);
            }
        }
        Ok(())
    }

    fn close_path(&mut self) {
        let Some(sub) = self.path.last_mut() else {
            return;
        };
        if sub.closed {
            return;
        }
        let Some(&start) = sub.points.first() else {
            return;
        };
        sub.closed = true;
        self.path.push(Subpath { points: vec![start], closed: false });
    }
}
