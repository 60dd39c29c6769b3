#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{PALETTE, WIDTH_PRESETS};

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_brush() {
    assert_eq!(Tool::default(), Tool::Brush);
}

#[test]
fn tool_maps_to_composite_mode() {
    assert_eq!(Tool::Brush.composite(), CompositeMode::SourceOver);
    assert_eq!(Tool::Eraser.composite(), CompositeMode::DestinationOut);
}

#[test]
fn tool_from_name_is_case_insensitive() {
    assert_eq!(Tool::from_name("Brush"), Some(Tool::Brush));
    assert_eq!(Tool::from_name(" ERASER "), Some(Tool::Eraser));
    assert_eq!(Tool::from_name("pen"), None);
}

#[test]
fn tool_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tool::Eraser).unwrap(), "\"eraser\"");
}

// =============================================================
// ToolSettings
// =============================================================

#[test]
fn settings_default_black_brush_width_five() {
    let s = ToolSettings::default();
    assert_eq!(s.tool, Tool::Brush);
    assert_eq!(s.width, 5.0);
    assert_eq!(s.color, Color::BLACK);
}

#[test]
fn selecting_eraser_sets_width_twenty() {
    let mut s = ToolSettings::default();
    s.select_tool(Tool::Eraser);
    assert_eq!(s.tool, Tool::Eraser);
    assert_eq!(s.width, 20.0);
    assert_eq!(s.composite(), CompositeMode::DestinationOut);
}

#[test]
fn selecting_brush_resets_width_five() {
    let mut s = ToolSettings::default();
    s.pick_width(10.0);
    s.select_tool(Tool::Brush);
    assert_eq!(s.width, 5.0);
}

#[test]
fn picking_color_switches_back_to_brush_and_keeps_width() {
    let mut s = ToolSettings::default();
    s.select_tool(Tool::Eraser);
    let red = Color::parse_hex(PALETTE[1]).unwrap();
    s.pick_color(red);
    assert_eq!(s.tool, Tool::Brush);
    assert_eq!(s.color, red);
    assert_eq!(s.width, 20.0);
}

#[test]
fn picking_width_switches_back_to_brush() {
    let mut s = ToolSettings::default();
    s.select_tool(Tool::Eraser);
    s.pick_width(WIDTH_PRESETS[0]);
    assert_eq!(s.tool, Tool::Brush);
    assert_eq!(s.width, 2.0);
}

#[test]
fn picking_invalid_width_is_ignored() {
    let mut s = ToolSettings::default();
    s.select_tool(Tool::Eraser);
    s.pick_width(0.0);
    s.pick_width(f64::NAN);
    assert_eq!(s.tool, Tool::Eraser);
    assert_eq!(s.width, 20.0);
}

#[test]
fn palette_entries_all_parse() {
    for hex in PALETTE {
        assert!(Color::parse_hex(hex).is_ok(), "{hex} should parse");
    }
}
