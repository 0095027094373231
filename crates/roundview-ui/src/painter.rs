use roundview_engine::coords::{CornerRadii, Rect, Vec2};
use roundview_engine::paint::Paint;
use roundview_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Commands are composited in the order they
/// are issued, so a later fill covers an earlier one.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    /// Axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        self.draw_list.push_rect(rect, paint.into());
    }

    /// Rounded rectangle with the same radius on every corner.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: impl Into<Paint>) {
        self.draw_list.push_rounded_rect(rect, CornerRadii::all(radius), paint.into());
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        self.draw_list.push_circle(center, radius, paint.into());
    }

    /// Number of commands recorded so far this frame.
    #[inline]
    pub fn command_count(&self) -> usize {
        self.draw_list.len()
    }
}
