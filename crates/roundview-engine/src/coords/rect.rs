use super::{Corner, Vec2};

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle anchored at the origin, the shape of a widget's own bounds.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { origin: Vec2::zero(), size }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.origin.y + self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Square of side `side` tucked into `corner` of this rectangle.
    ///
    /// This is the patch that covers a rounded corner's arc region when the
    /// corner radius equals `side`.
    pub fn corner_square(self, corner: Corner, side: f32) -> Rect {
        let x = match corner {
            Corner::TopLeft | Corner::BottomLeft => self.left(),
            Corner::TopRight | Corner::BottomRight => self.right() - side,
        };
        let y = match corner {
            Corner::TopLeft | Corner::TopRight => self.top(),
            Corner::BottomLeft | Corner::BottomRight => self.bottom() - side,
        };
        Rect::new(x, y, side, side)
    }
}
