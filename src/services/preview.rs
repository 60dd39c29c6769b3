//! ASCII preview of a raster for the terminal.
//!
//! Each character cell covers one column and two rows of sampled pixels,
//! drawn with half-block glyphs. A pixel counts as painted when its alpha
//! is non-zero.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use canvas::raster::Raster;

/// Render `raster`, sampling every `step` device pixels (`step` of 0 acts as 1).
#[must_use]
pub fn render(raster: &Raster, step: u32) -> String {
    let step = step.max(1);
    let painted = |x: u32, y: u32| raster.pixel(x, y).is_some_and(|c| c.a > 0);

    let cols = raster.width().div_ceil(step);
    let border = format!("+{}+", "-".repeat(cols as usize));
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    let mut y = 0;
    while y < raster.height() {
        out.push('|');
        let mut x = 0;
        while x < raster.width() {
            let top = painted(x, y);
            let bottom = painted(x, y + step);
            out.push(match (top, bottom) {
                (false, false) => ' ',
                (true, false) => '▀',
                (false, true) => '▄',
                (true, true) => '█',
            });
            x += step;
        }
        out.push_str("|\n");
        y += step * 2;
    }

    out.push_str(&border);
    out
}

/// Sampling step for a device pixel ratio, so the preview stays in CSS pixels.
#[must_use]
pub fn step_for_dpr(dpr: f64) -> u32 {
    if dpr.is_finite() && dpr >= 1.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = dpr.round() as u32;
        step
    } else {
        1
    }
}
