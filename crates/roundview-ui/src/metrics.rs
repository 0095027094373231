use roundview_mkml::Unit;

/// Display density information used to turn density-independent lengths into
/// device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per dp (`1.0` at 160 dpi).
    pub density: f32,
}

impl DisplayMetrics {
    pub const fn new(density: f32) -> Self {
        Self { density }
    }

    /// Corner setter conversion: `trunc(dp × density + 0.5)`.
    #[inline]
    pub fn dip_to_px(&self, dp: i32) -> i32 {
        (dp as f32 * self.density + 0.5) as i32
    }

    /// Plain scaling, truncated toward zero: `trunc(dp × density)`.
    #[inline]
    pub fn apply_dimension(&self, dp: i32) -> i32 {
        (dp as f32 * self.density) as i32
    }

    /// Declarative-attribute conversion.
    ///
    /// Rounds half away from zero; a non-zero input never collapses to zero
    /// pixels but yields `±1` instead.
    pub fn dimension_pixel_size(&self, value: f32, unit: Unit) -> i32 {
        let scaled = match unit {
            Unit::Px => value,
            Unit::Dp | Unit::Sp => value * self.density,
        };
        let px = if scaled >= 0.0 { (scaled + 0.5) as i32 } else { (scaled - 0.5) as i32 };
        match px {
            0 if value > 0.0 => 1,
            0 if value < 0.0 => -1,
            px => px,
        }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// dp → px for a widget that may not have display metrics; missing metrics
/// convert everything to zero.
#[inline]
pub fn dip_to_px(metrics: Option<&DisplayMetrics>, dp: i32) -> i32 {
    metrics.map_or(0, |m| m.dip_to_px(dp))
}

/// [`DisplayMetrics::apply_dimension`] with the same missing-metrics rule as
/// [`dip_to_px`].
#[inline]
pub fn apply_dimension(metrics: Option<&DisplayMetrics>, dp: i32) -> i32 {
    metrics.map_or(0, |m| m.apply_dimension(dp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dip_to_px_rounds_half_up() {
        let m = DisplayMetrics::new(1.5);
        assert_eq!(m.dip_to_px(3), 5); // 4.5 + 0.5
        assert_eq!(m.dip_to_px(2), 3);
        assert_eq!(m.dip_to_px(0), 0);
    }

    #[test]
    fn apply_dimension_truncates() {
        let m = DisplayMetrics::new(1.5);
        assert_eq!(m.apply_dimension(3), 4); // 4.5
        assert_eq!(m.dip_to_px(3), 5);
        assert_eq!(DisplayMetrics::new(2.75).apply_dimension(1), 2);
    }

    #[test]
    fn missing_metrics_convert_to_zero() {
        assert_eq!(apply_dimension(None, 48), 0);
        assert_eq!(dip_to_px(None, 48), 0);
        assert_eq!(dip_to_px(Some(&DisplayMetrics::new(2.0)), 48), 96);
    }

    #[test]
    fn px_dimensions_ignore_density() {
        let m = DisplayMetrics::new(3.0);
        assert_eq!(m.dimension_pixel_size(8.0, Unit::Px), 8);
        assert_eq!(m.dimension_pixel_size(8.0, Unit::Dp), 24);
    }

    #[test]
    fn tiny_nonzero_dimension_is_at_least_one_pixel() {
        let m = DisplayMetrics::new(0.75);
        assert_eq!(m.dimension_pixel_size(0.4, Unit::Dp), 1);
        assert_eq!(m.dimension_pixel_size(-0.4, Unit::Dp), -1);
        assert_eq!(m.dimension_pixel_size(0.0, Unit::Dp), 0);
    }
}
