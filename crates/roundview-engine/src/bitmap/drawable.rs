use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg;

use crate::paint::Color;

use super::{Bitmap, PixelFormat};

/// Something that can paint itself into a bitmap at its intrinsic size.
///
/// Bitmap-backed drawables hand out their buffer directly through
/// [`as_bitmap`](Drawable::as_bitmap); everything else goes through
/// [`rasterize`].
pub trait Drawable {
    /// Natural size in device pixels. `(0, 0)` means "no intrinsic size".
    fn intrinsic_size(&self) -> (u32, u32);

    /// `true` when every pixel the drawable produces is fully opaque.
    fn is_opaque(&self) -> bool;

    /// Paints into `target`, which is sized to the intrinsic size.
    fn draw(&self, target: &mut Bitmap);

    /// The backing buffer, for drawables that already are one.
    fn as_bitmap(&self) -> Option<Arc<Bitmap>> {
        None
    }
}

/// Obtains a fixed-size pixel buffer for `drawable`.
///
/// Bitmap drawables are returned as is. Others are rendered into a fresh
/// buffer of their intrinsic size: `Rgba8888` when they may be translucent,
/// packed `Rgb565` when opaque. Drawables without an intrinsic size yield
/// `None`.
pub fn rasterize(drawable: &dyn Drawable) -> Option<Arc<Bitmap>> {
    if let Some(bmp) = drawable.as_bitmap() {
        return Some(bmp);
    }
    let (w, h) = drawable.intrinsic_size();
    if w == 0 || h == 0 {
        log::debug!("drawable has no intrinsic size; nothing to rasterize");
        return None;
    }
    let format = if drawable.is_opaque() { PixelFormat::Rgb565 } else { PixelFormat::Rgba8888 };
    let mut bmp = Bitmap::new(w, h, format);
    drawable.draw(&mut bmp);
    log::debug!("rasterized drawable into {w}x{h} {format:?} buffer");
    Some(Arc::new(bmp))
}

// ── BitmapDrawable ────────────────────────────────────────────────────────

/// A drawable that is just a decoded bitmap.
#[derive(Debug, Clone)]
pub struct BitmapDrawable {
    bitmap: Arc<Bitmap>,
}

impl BitmapDrawable {
    pub fn new(bitmap: impl Into<Arc<Bitmap>>) -> Self {
        Self { bitmap: bitmap.into() }
    }

    #[inline]
    pub fn bitmap(&self) -> &Arc<Bitmap> {
        &self.bitmap
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        (self.bitmap.width(), self.bitmap.height())
    }

    fn is_opaque(&self) -> bool {
        !self.bitmap.has_alpha()
    }

    fn draw(&self, target: &mut Bitmap) {
        if (target.width(), target.height()) == self.intrinsic_size() {
            target.copy_from_premultiplied(self.bitmap.as_bytes());
        }
    }

    fn as_bitmap(&self) -> Option<Arc<Bitmap>> {
        Some(self.bitmap.clone())
    }
}

// ── ColorDrawable ─────────────────────────────────────────────────────────

/// A solid color, optionally with an intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDrawable {
    pub color: Color,
    pub size: (u32, u32),
}

impl ColorDrawable {
    pub fn new(color: Color, width: u32, height: u32) -> Self {
        Self { color, size: (width, height) }
    }
}

impl Drawable for ColorDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        self.size
    }

    fn is_opaque(&self) -> bool {
        self.color.a >= 1.0
    }

    fn draw(&self, target: &mut Bitmap) {
        let px = self.color.to_premul_u8();
        let w = target.width();
        let h = target.height();
        let mut flat = Vec::with_capacity(w as usize * h as usize * 4);
        for _ in 0..(w as usize * h as usize) {
            flat.extend_from_slice(&px);
        }
        target.copy_from_premultiplied(&flat);
    }
}

// ── SvgDrawable ───────────────────────────────────────────────────────────

/// A vector drawable backed by a parsed SVG tree.
pub struct SvgDrawable {
    tree: usvg::Tree,
}

impl SvgDrawable {
    pub fn new(tree: usvg::Tree) -> Self {
        Self { tree }
    }

    /// Parses SVG source bytes.
    pub fn from_data(data: &[u8]) -> anyhow::Result<Self> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
        Ok(Self { tree })
    }
}

impl Drawable for SvgDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        let size = self.tree.size();
        (size.width().ceil() as u32, size.height().ceil() as u32)
    }

    fn is_opaque(&self) -> bool {
        false
    }

    fn draw(&self, target: &mut Bitmap) {
        let Some(mut pixmap) = tiny_skia::Pixmap::new(target.width(), target.height()) else {
            return;
        };
        let (iw, ih) = self.intrinsic_size();
        let transform = tiny_skia::Transform::from_scale(
            target.width() as f32 / iw.max(1) as f32,
            target.height() as f32 / ih.max(1) as f32,
        );
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());
        // tiny-skia pixmaps are premultiplied RGBA8, same layout as ours.
        target.copy_from_premultiplied(pixmap.data());
    }
}
