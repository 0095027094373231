//! Pure layout and transform math for [`RoundImageView`](super::RoundImageView).
//!
//! Everything here is a function of the configuration, the measured box and
//! the bitmap size; nothing is cached between passes.

use roundview_engine::coords::{Rect, Vec2};

use crate::host::BaseMeasure;
use crate::widgets::image::{ImageTransform, centered, stretch};

use super::config::{FitMode, RoundImageConfig, Shape};

// ── Measurement ───────────────────────────────────────────────────────────

/// Final box size from the framework's own measurement.
///
/// Precedence: fixed size pair, then circle squaring, then aspect ratio,
/// then the natural size unchanged. Results are whole pixels.
pub fn measure_box(config: &RoundImageConfig, base: BaseMeasure) -> Vec2 {
    if let Some((fw, fh)) = config.fixed_ratio() {
        let width = base.proposed.x;
        let mut height = base.proposed.y;
        if width > 0.0 {
            height = (width * (fh as f32 / fw as f32)).trunc();
        }
        return Vec2::new(width, height);
    }

    let natural = base.natural;
    if config.shape == Shape::Circle {
        return Vec2::splat(natural.min_element());
    }
    if config.aspect_ratio > 0.0 {
        return Vec2::new(natural.x, (natural.x / config.aspect_ratio).trunc());
    }
    natural
}

// ── image_transform ───────────────────────────────────────────────────────

/// Sampling transform that makes a `bitmap`-sized image cover `box_size`.
///
/// `Fill` stretches each axis on its own. Otherwise a uniform scale is used:
/// a circle divides its diameter by the *larger* bitmap side, a round rect
/// keeps scale `1` when the bitmap already matches the box and otherwise
/// cover-fits. The overflow is then centered horizontally (`Crop`) or on both
/// axes (`CenterCrop`).
pub fn image_transform(shape: Shape, fit: FitMode, box_size: Vec2, bitmap: Vec2) -> ImageTransform {
    if bitmap.x <= 0.0 || bitmap.y <= 0.0 {
        return ImageTransform::IDENTITY;
    }
    if fit == FitMode::Fill {
        return stretch(box_size, bitmap);
    }

    let scale = match shape {
        Shape::Circle => box_size.min_element().trunc() / bitmap.max_element(),
        Shape::RoundRect if bitmap == box_size => 1.0,
        Shape::RoundRect => (box_size.x / bitmap.x).max(box_size.y / bitmap.y),
    };

    let mut transform = centered(box_size, bitmap, scale);
    if fit == FitMode::Crop {
        transform.translate_y = 0.0;
    }
    transform
}

// ── DerivedGeometry ───────────────────────────────────────────────────────

/// Everything a paint pass needs, recomputed from configuration and box size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub box_size: Vec2,
    /// Half the shorter box side, in whole pixels.
    pub circle_radius: f32,
    /// Bounds of the rounded rectangle, in box coordinates.
    pub clip_rect: Rect,
    pub transform: ImageTransform,
}

impl DerivedGeometry {
    pub fn compute(config: &RoundImageConfig, box_size: Vec2, bitmap: Vec2) -> Self {
        let side = box_size.min_element().max(0.0) as i32;
        Self {
            box_size,
            circle_radius: (side / 2) as f32,
            clip_rect: Rect::from_size(box_size),
            transform: image_transform(config.shape, config.fit, box_size, bitmap),
        }
    }
}
