use roundview_engine::coords::{Corner, CornerRadii};

// ── Shape ─────────────────────────────────────────────────────────────────

/// Clip region the image is painted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Circle,
    /// Rectangle with rounded (or selectively squared) corners.
    RoundRect,
}

impl Shape {
    /// Decode a raw shape code: `0` circle, `1` round rect, anything else
    /// falls back to circle.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Shape::RoundRect,
            _ => Shape::Circle,
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Shape::Circle => 0,
            Shape::RoundRect => 1,
        }
    }
}

// ── FitMode ───────────────────────────────────────────────────────────────

/// How the bitmap is scaled into the box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Stretch to the box on each axis independently. Never crops.
    Fill,
    /// Uniform cover scale; overflow is centered horizontally only.
    #[default]
    Crop,
    /// Uniform cover scale; overflow is centered on both axes.
    CenterCrop,
}

// ── RoundImageConfig ──────────────────────────────────────────────────────

/// Construction-time configuration of a [`RoundImageView`].
///
/// All lengths are device pixels.
///
/// [`RoundImageView`]: super::RoundImageView
#[derive(Debug, Clone, PartialEq)]
pub struct RoundImageConfig {
    pub shape: Shape,
    /// Radius applied to every rounded corner. `None` derives it from
    /// [`corners`](Self::corners), see [`resolved_radius`](Self::resolved_radius).
    pub radius: Option<f32>,
    /// Per-corner radii. A corner whose entry is `0` is painted square.
    pub corners: CornerRadii,
    /// `height = width / aspect_ratio` when positive; unset otherwise.
    pub aspect_ratio: f32,
    pub fit: FitMode,
    /// Width/height pair defining a forced aspect ratio.
    pub fixed_size: Option<(i32, i32)>,
}

impl Default for RoundImageConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Circle,
            radius: None,
            corners: CornerRadii::zero(),
            aspect_ratio: 0.0,
            fit: FitMode::Crop,
            fixed_size: None,
        }
    }
}

impl RoundImageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn radius(mut self, px: f32) -> Self {
        self.radius = Some(px.max(0.0));
        self
    }

    pub fn corner(mut self, corner: Corner, px: f32) -> Self {
        self.corners.set(corner, px.max(0.0));
        self
    }

    pub fn corners(mut self, radii: CornerRadii) -> Self {
        self.corners = radii.clamped(f32::INFINITY);
        self
    }

    pub fn aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    pub fn fixed_size(mut self, width: i32, height: i32) -> Self {
        self.fixed_size = Some((width, height));
        self
    }

    /// The uniform radius: the explicit one, else the first non-zero corner
    /// in the order bottom-left, top-left, bottom-right, top-right.
    pub fn resolved_radius(&self) -> f32 {
        self.radius.unwrap_or_else(|| {
            [Corner::BottomLeft, Corner::TopLeft, Corner::BottomRight, Corner::TopRight]
                .into_iter()
                .map(|c| self.corners.get(c))
                .find(|&r| r != 0.0)
                .unwrap_or(0.0)
        })
    }

    /// The fixed size pair, only when both halves are positive.
    pub fn fixed_ratio(&self) -> Option<(i32, i32)> {
        self.fixed_size.filter(|&(w, h)| w > 0 && h > 0)
    }
}
