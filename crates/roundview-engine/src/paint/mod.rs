//! Paint model shared between the widget layer and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, transformed image pattern) and their tiny-skia form
//!
//! Geometry types remain in `coords`.

use resvg::tiny_skia;

pub mod color;
pub mod image;

pub use color::Color;
pub use image::ImagePaint;
pub use resvg::tiny_skia::Transform;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Image(ImagePaint),
}

impl Paint {
    /// tiny-skia paint for this source, anti-aliased.
    ///
    /// `None` when the source covers nothing (an empty bitmap).
    pub fn to_skia(&self) -> Option<tiny_skia::Paint<'_>> {
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        match self {
            Paint::Solid(c) => paint.set_color(c.to_skia()),
            Paint::Image(img) => paint.shader = img.shader()?,
        }
        Some(paint)
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<ImagePaint> for Paint {
    fn from(p: ImagePaint) -> Self {
        Paint::Image(p)
    }
}
