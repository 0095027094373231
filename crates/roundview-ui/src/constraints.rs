use roundview_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. An infinite `max` on an axis
/// means the parent places no limit there (Android's `UNSPECIFIED`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint on either axis.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::splat(f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Replace the height constraint with `f32::INFINITY` (used by [`Column`]).
    ///
    /// [`Column`]: crate::widgets::flex::Column
    #[inline]
    #[must_use]
    pub fn with_infinite_height(self) -> Self {
        Self { max: Vec2::new(self.max.x, f32::INFINITY), ..self }
    }

    /// Replace the width constraint with `f32::INFINITY` (used by [`Row`]).
    ///
    /// [`Row`]: crate::widgets::flex::Row
    #[inline]
    #[must_use]
    pub fn with_infinite_width(self) -> Self {
        Self { max: Vec2::new(f32::INFINITY, self.max.y), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── constrain ─────────────────────────────────────────────────────────

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn constrain_unbounded_keeps_size() {
        let v = Vec2::new(640.0, 480.0);
        assert_eq!(Constraints::unbounded().constrain(v), v);
    }

    // ── axis helpers ──────────────────────────────────────────────────────

    #[test]
    fn infinite_axis_replacement_keeps_the_other_axis() {
        let c = Constraints::loose(Vec2::new(30.0, 20.0));
        assert_eq!(c.with_infinite_width().max, Vec2::new(f32::INFINITY, 20.0));
        assert_eq!(c.with_infinite_height().max, Vec2::new(30.0, f32::INFINITY));
    }
}
