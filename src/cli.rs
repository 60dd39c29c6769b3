//! Command-line flags. Each falls back to an env var, then a default.

use std::time::Duration;

use canvas::geom::Viewport;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "sketchguess", about = "Sketch-and-guess round driver for the terminal")]
pub struct Args {
    /// Driver tick period in milliseconds.
    #[arg(long, env = "SKETCH_TICK_MS", default_value_t = 100)]
    pub tick_ms: u64,

    /// Canvas width in CSS pixels.
    #[arg(long, env = "SKETCH_CANVAS_WIDTH", default_value_t = 64.0)]
    pub canvas_width: f64,

    /// Canvas height in CSS pixels.
    #[arg(long, env = "SKETCH_CANVAS_HEIGHT", default_value_t = 32.0)]
    pub canvas_height: f64,

    /// Device pixel ratio applied to the raster backing store.
    #[arg(long, env = "SKETCH_DPR", default_value_t = 1.0)]
    pub dpr: f64,
}

impl Default for Args {
    fn default() -> Self {
        Self { tick_ms: 100, canvas_width: 64.0, canvas_height: 32.0, dpr: 1.0 }
    }
}

impl Args {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas_width, self.canvas_height, self.dpr)
    }

    /// Tick period, never zero.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
