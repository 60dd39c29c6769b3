//! Shared numeric constants for the canvas crate.

// ── Tool defaults ───────────────────────────────────────────────

/// Stroke width applied when the brush is selected.
pub const BRUSH_DEFAULT_WIDTH: f64 = 5.0;

/// Stroke width applied when the eraser is selected.
pub const ERASER_DEFAULT_WIDTH: f64 = 20.0;

/// Width presets offered by the toolbar, in CSS pixels.
pub const WIDTH_PRESETS: [f64; 4] = [2.0, 5.0, 10.0, 20.0];

/// Toolbar palette, in display order.
pub const PALETTE: [&str; 9] = [
    "#000000", "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#a855f7", "#ec4899", "#ffffff",
];

// ── Backend defaults ────────────────────────────────────────────

/// Line width a freshly sized backend reports, matching HTML canvas.
pub const BACKEND_DEFAULT_LINE_WIDTH: f64 = 1.0;
