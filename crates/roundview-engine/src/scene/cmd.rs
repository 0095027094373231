use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - give it an outline in `render::path`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
}

impl DrawCmd {
    /// Conservative device-space bounds of the shape.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCmd::Rect(c) => c.rect,
            DrawCmd::RoundedRect(c) => c.rect,
            DrawCmd::Circle(c) => Rect::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.radius * 2.0,
                c.radius * 2.0,
            ),
        }
    }

    #[inline]
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCmd::Rect(c) => &c.paint,
            DrawCmd::RoundedRect(c) => &c.paint,
            DrawCmd::Circle(c) => &c.paint,
        }
    }
}
