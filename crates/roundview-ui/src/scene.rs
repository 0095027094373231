use roundview_engine::coords::{Rect, Vec2};
use roundview_engine::paint::Color;
use roundview_engine::render::Canvas;
use roundview_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator: measures a widget tree, paints it into a
/// [`DrawList`], and optionally rasterizes that list on a tiny-skia canvas.
///
/// # Example
///
/// ```rust
/// use roundview_ui::prelude::*;
///
/// let mut ui = UiScene::new();
/// let root: Element = Row::new().spacing(4.0).into();
/// // An empty row measures to nothing, so there is no canvas to draw on.
/// assert!(ui.render(&root, Vec2::new(320.0, 240.0), Color::transparent()).is_none());
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Size the root wants inside `viewport`.
    pub fn layout(&self, root: &Element, viewport: Vec2) -> Vec2 {
        root.measure(Constraints::loose(viewport))
    }

    /// Measure and paint `root` at the origin.
    ///
    /// The returned list is owned by the scene and valid until the next call.
    pub fn frame(&mut self, root: &Element, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let size = self.layout(root, viewport);
        log::trace!("frame: root measured at {}x{}", size.x, size.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, Rect::from_size(size));
        }

        &self.draw_list
    }

    /// Run [`frame`](Self::frame) and composite the result onto a canvas the
    /// size of the measured root, cleared to `background` first.
    ///
    /// `None` when the root measures to an empty box.
    pub fn render(&mut self, root: &Element, viewport: Vec2, background: Color) -> Option<Canvas> {
        let size = self.layout(root, viewport);
        let mut canvas = Canvas::new(size.x.ceil().max(0.0) as u32, size.y.ceil().max(0.0) as u32)?;
        canvas.clear(background);
        canvas.draw_list(self.frame(root, viewport));
        log::debug!(
            "rendered {} command(s) onto {}x{} canvas",
            self.draw_list.len(),
            canvas.width(),
            canvas.height()
        );
        Some(canvas)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
