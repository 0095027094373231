use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Filled rounded rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, paint: Paint) -> Self {
        Self { rect, radii, paint }
    }
}

impl DrawList {
    /// Records a filled rounded rectangle with per-corner radii.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, paint: Paint) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, paint)));
    }
}
