use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};

use super::{Bitmap, BitmapDrawable, Drawable, SvgDrawable};

/// Decodes an encoded raster image (PNG, JPEG, ...) into a premultiplied bitmap.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap> {
    let rgba = image::load_from_memory(bytes)
        .context("failed to decode image")?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    Bitmap::from_straight_rgba(w, h, rgba.into_raw())
        .context("decoded image has inconsistent dimensions")
}

/// Loads a drawable from disk, choosing the SVG path by file extension.
pub fn load_drawable(path: impl AsRef<Path>) -> Result<Rc<dyn Drawable>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    let drawable: Rc<dyn Drawable> = if is_svg {
        Rc::new(
            SvgDrawable::from_data(&bytes)
                .with_context(|| format!("failed to parse SVG {}", path.display()))?,
        )
    } else {
        let bmp = decode_bitmap(&bytes).with_context(|| format!("while loading {}", path.display()))?;
        Rc::new(BitmapDrawable::new(bmp))
    };
    log::debug!("loaded drawable {} ({:?})", path.display(), drawable.intrinsic_size());
    Ok(drawable)
}
