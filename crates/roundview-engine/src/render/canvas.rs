use std::path::Path;

use anyhow::{Context, Result};
use resvg::tiny_skia::{FillRule, Pixmap, Transform};

use crate::bitmap::Bitmap;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::path::path_of;

/// Render target backed by a tiny-skia pixmap (premultiplied RGBA8).
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Transparent canvas of the given size, or `None` when either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills every pixel with `color`, ignoring what was there.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Composites every command of `list` in paint order.
    pub fn draw_list(&mut self, list: &DrawList) {
        for cmd in list.cmds() {
            self.fill(cmd);
        }
    }

    fn fill(&mut self, cmd: &DrawCmd) {
        let Some(path) = path_of(cmd) else { return };
        let Some(paint) = cmd.paint().to_skia() else {
            log::debug!("image paint has an empty bitmap; skipped");
            return;
        };
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Premultiplied pixel at `(x, y)`; transparent outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixmap
            .pixel(x, y)
            .map_or([0; 4], |p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bitmap = Bitmap::from_premultiplied(self.width(), self.height(), self.pixmap.data().to_vec())
            .context("canvas buffer does not match its size")?;
        bitmap.save_png(path)
    }
}
