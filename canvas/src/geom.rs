#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in logical (CSS pixel) or device pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both coordinates uniformly.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// On-screen box of the drawing surface plus the device pixel ratio.
///
/// `width_css` / `height_css` are in CSS pixels. `dpr` is physical pixels per
/// CSS pixel; non-positive or non-finite values are treated as 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width_css: f64,
    pub height_css: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width_css: 0.0, height_css: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width_css: f64, height_css: f64, dpr: f64) -> Self {
        Self { width_css, height_css, dpr }
    }

    /// The scale factor that is actually applied to the context.
    #[must_use]
    pub fn effective_dpr(&self) -> f64 {
        if self.dpr.is_finite() && self.dpr > 0.0 { self.dpr } else { 1.0 }
    }

    /// Backing raster dimensions in device pixels (`ceil(css × dpr)`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = self.effective_dpr();
        let to_px = |css: f64| {
            if css.is_finite() && css > 0.0 { (css * dpr).ceil().min(f64::from(u32::MAX)) as u32 } else { 0 }
        };
        (to_px(self.width_css), to_px(self.height_css))
    }
}
