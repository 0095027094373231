//! roundview engine crate.
//!
//! Owns everything below the widget layer: geometry, the paint model,
//! drawables and their rasterization into bitmaps, the renderer-agnostic draw
//! list, and a tiny-skia canvas that turns a draw list into pixels.

pub mod bitmap;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
