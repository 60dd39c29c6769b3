//! Freehand drawing surface for the sketch-and-guess game.
//!
//! The surface translates pointer-down/move/up events into stroked segments
//! on a 2D backend, honoring the device pixel ratio so drawing commands are
//! always issued in CSS pixels. It runs natively against a software raster
//! and in the browser against `CanvasRenderingContext2d`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | [`surface::DrawingSurface`]: configure, begin/extend/end stroke, resize |
//! | [`engine`] | [`engine::CanvasEngine`]: pointer event dispatch onto a surface |
//! | [`input`] | Pointer event types and the stroke gesture state machine |
//! | [`backend`] | The [`backend::Context2d`] seam and stroke state enums |
//! | [`raster`] | Software RGBA backend |
//! | [`web`] | Browser canvas backend |
//! | [`tool`] | Brush/eraser selection and toolbar rules |
//! | [`color`] | Hex color parsing |
//! | [`geom`] | Points and viewport sizing |
//! | [`consts`] | Shared constants (palette, width presets, defaults) |

pub mod backend;
pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod raster;
pub mod surface;
pub mod tool;
pub mod web;
