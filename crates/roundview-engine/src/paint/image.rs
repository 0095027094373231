use std::sync::Arc;

use resvg::tiny_skia::{FilterQuality, Pattern, PixmapRef, Shader, SpreadMode, Transform};

use crate::bitmap::Bitmap;

/// Bitmap pattern fill.
///
/// `transform` is the pattern's local matrix: it takes bitmap pixels to
/// device pixels. Outside the bitmap the edge pixels repeat outward
/// (`SpreadMode::Pad`) and sampling is bilinear.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePaint {
    pub bitmap: Arc<Bitmap>,
    pub transform: Transform,
}

impl ImagePaint {
    pub fn new(bitmap: Arc<Bitmap>, transform: Transform) -> Self {
        Self { bitmap, transform }
    }

    /// tiny-skia shader over the bitmap's pixels.
    ///
    /// `None` for empty bitmaps; such a paint covers nothing.
    pub fn shader(&self) -> Option<Shader<'_>> {
        let pixmap = PixmapRef::from_bytes(self.bitmap.as_bytes(), self.bitmap.width(), self.bitmap.height())?;
        Some(Pattern::new(pixmap, SpreadMode::Pad, FilterQuality::Bilinear, 1.0, self.transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PixelFormat;

    #[test]
    fn empty_bitmap_has_no_shader() {
        let paint = ImagePaint::new(Arc::new(Bitmap::new(0, 4, PixelFormat::Rgba8888)), Transform::identity());
        assert!(paint.shader().is_none());
    }

    #[test]
    fn non_empty_bitmap_yields_a_pattern() {
        let paint = ImagePaint::new(Arc::new(Bitmap::new(2, 1, PixelFormat::Rgba8888)), Transform::from_scale(4.0, 4.0));
        assert!(matches!(paint.shader(), Some(Shader::Pattern(_))));
    }
}
