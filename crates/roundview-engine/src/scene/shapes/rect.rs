use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Filled axis-aligned rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, paint: Paint) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, paint)));
    }
}
