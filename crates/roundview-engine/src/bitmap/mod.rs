//! Fixed-size pixel buffers and the drawables that produce them.
//!
//! A [`Bitmap`] stores premultiplied RGBA8 pixels regardless of its nominal
//! [`PixelFormat`]; an `Rgb565` bitmap is opaque and has its channels
//! quantised to 5/6/5 bits, which is what a packed opaque buffer holds.

mod drawable;
mod load;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

use crate::coords::Vec2;

pub use drawable::{BitmapDrawable, ColorDrawable, Drawable, SvgDrawable, rasterize};
pub use load::{decode_bitmap, load_drawable};

/// Nominal storage format of a bitmap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    /// 8 bits per channel with alpha.
    Rgba8888,
    /// Packed opaque 16-bit color.
    Rgb565,
}

/// Premultiplied RGBA8 pixel buffer.
#[derive(Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Bitmap {
    /// Allocates a cleared bitmap: transparent for `Rgba8888`, opaque black
    /// for `Rgb565`.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let len = width as usize * height as usize;
        let clear = match format {
            PixelFormat::Rgba8888 => [0, 0, 0, 0],
            PixelFormat::Rgb565 => [0, 0, 0, 255],
        };
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&clear);
        }
        Self { width, height, format, data }
    }

    /// Wraps straight-alpha RGBA8 bytes, premultiplying them.
    ///
    /// Returns `None` when `data` does not hold exactly `width * height` pixels.
    pub fn from_straight_rgba(width: u32, height: u32, mut data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        for px in bytemuck::cast_slice_mut::<u8, [u8; 4]>(&mut data) {
            let a = px[3] as u32;
            if a < 255 {
                for c in &mut px[..3] {
                    *c = ((*c as u32 * a + 127) / 255) as u8;
                }
            }
        }
        Some(Self { width, height, format: PixelFormat::Rgba8888, data })
    }

    /// Wraps bytes that are already premultiplied RGBA8.
    pub fn from_premultiplied(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, format: PixelFormat::Rgba8888, data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.format == PixelFormat::Rgba8888
    }

    /// Pixels as `[r, g, b, a]` premultiplied quads, row-major.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels()[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let w = self.width;
        self.pixels_mut()[y as usize * w as usize + x as usize] = px;
    }

    /// Replaces the pixel data from a premultiplied buffer of the same size.
    ///
    /// Opaque bitmaps are re-quantised afterwards.
    pub(crate) fn copy_from_premultiplied(&mut self, src: &[u8]) {
        if src.len() != self.data.len() {
            log::warn!(
                "bitmap copy size mismatch: {} bytes into {}x{}",
                src.len(),
                self.width,
                self.height
            );
            return;
        }
        self.data.copy_from_slice(src);
        if self.format == PixelFormat::Rgb565 {
            self.quantize_rgb565();
        }
    }

    /// Flattens onto black and reduces channels to 5/6/5 bits.
    pub(crate) fn quantize_rgb565(&mut self) {
        for px in self.pixels_mut() {
            // Premultiplied color over opaque black is the color itself.
            let r5 = (px[0] as u32 * 31 + 127) / 255;
            let g6 = (px[1] as u32 * 63 + 127) / 255;
            let b5 = (px[2] as u32 * 31 + 127) / 255;
            *px = [
                ((r5 * 255 + 15) / 31) as u8,
                ((g6 * 255 + 31) / 63) as u8,
                ((b5 * 255 + 15) / 31) as u8,
                255,
            ];
        }
    }

    /// Copy with the color removed.
    ///
    /// Every channel becomes the pixel's Rec. 709 luma and alpha is kept.
    /// Luma is a linear mix, so it is taken straight from the premultiplied
    /// channels. The copy is always `Rgba8888`.
    pub fn desaturated(&self) -> Bitmap {
        let Some(rgba) = image::RgbaImage::from_raw(self.width, self.height, self.data.clone()) else {
            return self.clone();
        };
        let gray = image::imageops::grayscale_alpha(&rgba);
        let mut data = Vec::with_capacity(self.data.len());
        for px in gray.pixels() {
            let [l, a] = px.0;
            data.extend_from_slice(&[l, l, l, a]);
        }
        Self { width: self.width, height: self.height, format: PixelFormat::Rgba8888, data }
    }

    /// Converts to a straight-alpha `image::RgbaImage`.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = image::RgbaImage::new(self.width, self.height);
        for (dst, src) in out.pixels_mut().zip(self.pixels()) {
            let a = src[3] as u32;
            dst.0 = if a == 0 {
                [0, 0, 0, 0]
            } else {
                let un = |c: u8| ((c as u32 * 255 + a / 2) / a).min(255) as u8;
                [un(src[0]), un(src[1]), un(src[2]), src[3]]
            };
        }
        out
    }

    /// Writes the bitmap as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write PNG to {}", path.display()))
    }
}
