/// One of the four corners of a rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in field order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// Per-corner radii for a rounded rectangle (device pixels).
///
/// A radius of `0.0` means that corner is square. Negative values are treated
/// as zero by the rasterizer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> f32 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    #[inline]
    pub fn set(&mut self, corner: Corner, radius: f32) {
        let slot = match corner {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        };
        *slot = radius;
    }

    /// `true` when every corner is square.
    #[inline]
    pub fn is_zero(&self) -> bool {
        Corner::ALL.iter().all(|&c| self.get(c) == 0.0)
    }

    /// Copy with every radius clamped to `[0, max]`.
    #[must_use]
    pub fn clamped(self, max: f32) -> Self {
        let f = |r: f32| r.max(0.0).min(max.max(0.0));
        Self::new(f(self.top_left), f(self.top_right), f(self.bottom_left), f(self.bottom_right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_round_trip_per_corner() {
        let mut radii = CornerRadii::zero();
        radii.set(Corner::BottomLeft, 6.0);
        assert_eq!(radii.get(Corner::BottomLeft), 6.0);
        assert_eq!(radii.bottom_left, 6.0);
        assert_eq!(radii.top_left, 0.0);
    }

    #[test]
    fn is_zero_only_when_all_square() {
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::new(0.0, 0.0, 0.0, 1.0).is_zero());
    }

    #[test]
    fn clamped_limits_both_ends() {
        let radii = CornerRadii::new(-3.0, 50.0, 10.0, 0.0).clamped(20.0);
        assert_eq!(radii, CornerRadii::new(0.0, 20.0, 10.0, 0.0));
    }
}
