//! Drawing tools and the persistent tool settings read on every stroke.

#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use serde::{Deserialize, Serialize};

use crate::backend::CompositeMode;
use crate::color::Color;
use crate::consts::{BRUSH_DEFAULT_WIDTH, ERASER_DEFAULT_WIDTH};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paint with the selected color.
    #[default]
    Brush,
    /// Erase to transparency.
    Eraser,
}

impl Tool {
    /// Compositing mode a stroke drawn with this tool uses.
    #[must_use]
    pub fn composite(self) -> CompositeMode {
        match self {
            Self::Brush => CompositeMode::SourceOver,
            Self::Eraser => CompositeMode::DestinationOut,
        }
    }

    /// Width the toolbar switches to when this tool is selected.
    #[must_use]
    pub fn default_width(self) -> f64 {
        match self {
            Self::Brush => BRUSH_DEFAULT_WIDTH,
            Self::Eraser => ERASER_DEFAULT_WIDTH,
        }
    }

    /// Parse a tool name (`brush` / `eraser`), case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "brush" => Some(Self::Brush),
            "eraser" => Some(Self::Eraser),
            _ => None,
        }
    }
}

/// Tool, width and color selected in the toolbar.
///
/// Mutated only through the toolbar operations below, which carry the
/// toolbar's switching rules: picking a color or a width returns to the brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub tool: Tool,
    pub width: f64,
    pub color: Color,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self { tool: Tool::Brush, width: BRUSH_DEFAULT_WIDTH, color: Color::BLACK }
    }
}

impl ToolSettings {
    /// Select a tool; resets the width to that tool's default.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.width = tool.default_width();
    }

    /// Pick a palette color; switches back to the brush.
    pub fn pick_color(&mut self, color: Color) {
        self.color = color;
        self.tool = Tool::Brush;
    }

    /// Pick a stroke width; switches back to the brush.
    ///
    /// Non-finite or non-positive widths are ignored.
    pub fn pick_width(&mut self, width: f64) {
        if !width.is_finite() || width <= 0.0 {
            return;
        }
        self.width = width;
        self.tool = Tool::Brush;
    }

    /// Compositing mode for the active tool.
    #[must_use]
    pub fn composite(&self) -> CompositeMode {
        self.tool.composite()
    }
}
