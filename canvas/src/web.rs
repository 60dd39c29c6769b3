//! Browser backend over `HtmlCanvasElement` / `CanvasRenderingContext2d`.
//!
//! This is the only module that touches `web_sys`. Fallible canvas calls
//! propagate `JsValue` errors to the caller.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::backend::{CompositeMode, Context2d, LineCap, LineJoin};
use crate::color::Color;
use crate::geom::{Point, Viewport};

/// A canvas element and its 2D context.
pub struct HtmlCanvas {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl HtmlCanvas {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }

    /// Current on-screen box and `window.devicePixelRatio` (1.0 if unavailable).
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let rect = self.canvas.get_bounding_client_rect();
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Viewport::new(rect.width(), rect.height(), dpr)
    }

    #[must_use]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Context2d for HtmlCanvas {
    type Error = JsValue;

    fn set_backing_size(&mut self, width_px: u32, height_px: u32) -> Result<(), Self::Error> {
        // Assigning either dimension resets the context state.
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
        Ok(())
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), Self::Error> {
        self.ctx.scale(sx, sy)
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(cap.as_css());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(join.as_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), Self::Error> {
        self.ctx.set_global_composite_operation(mode.as_css())
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, point: Point) -> Result<(), Self::Error> {
        self.ctx.move_to(point.x, point.y);
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> Result<(), Self::Error> {
        self.ctx.line_to(point.x, point.y);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.ctx.stroke();
        Ok(())
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }
}
