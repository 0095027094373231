//! The capabilities a view borrows from the framework it lives in.
//!
//! A widget composes a [`ViewHost`] instead of inheriting from a platform
//! view: the host performs the framework's own measurement of the content,
//! receives redraw and re-layout requests, and contributes its part of the
//! saved instance state.

use std::fmt;

use roundview_engine::coords::Vec2;

use crate::constraints::Constraints;

// ── LayoutDim ─────────────────────────────────────────────────────────────

/// Requested size on one axis, as declared by the owning layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LayoutDim {
    /// As large as the content, within the parent's limit.
    #[default]
    Wrap,
    /// As large as the parent allows.
    Fill,
    /// Exactly this many device pixels.
    Exact(f32),
}

/// Declared width and height of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutParams {
    pub width: LayoutDim,
    pub height: LayoutDim,
}

impl LayoutParams {
    pub fn exact(width: f32, height: f32) -> Self {
        Self { width: LayoutDim::Exact(width), height: LayoutDim::Exact(height) }
    }
}

// ── MeasureSpec ───────────────────────────────────────────────────────────

/// One axis of the parent's proposal, after combining the parent's limit with
/// the view's own [`LayoutDim`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    Exactly(f32),
    AtMost(f32),
    Unspecified,
}

impl MeasureSpec {
    pub fn new(dim: LayoutDim, max: f32) -> Self {
        match dim {
            LayoutDim::Exact(px) => MeasureSpec::Exactly(px.max(0.0)),
            LayoutDim::Fill if max.is_finite() => MeasureSpec::Exactly(max),
            LayoutDim::Wrap if max.is_finite() => MeasureSpec::AtMost(max),
            LayoutDim::Fill | LayoutDim::Wrap => MeasureSpec::Unspecified,
        }
    }

    /// The proposed size; `0` when nothing was proposed.
    pub fn size(self) -> f32 {
        match self {
            MeasureSpec::Exactly(v) | MeasureSpec::AtMost(v) => v,
            MeasureSpec::Unspecified => 0.0,
        }
    }

    /// Settle on a size given what the content would like to be.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(v) => v,
            MeasureSpec::AtMost(v) => desired.min(v),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// What the framework's own measure pass produced for a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseMeasure {
    /// Size the plain image view would take (whole pixels).
    pub natural: Vec2,
    /// Size the parent proposed, `0` on unspecified axes.
    pub proposed: Vec2,
}

// ── ViewHost ──────────────────────────────────────────────────────────────

pub trait ViewHost {
    /// State the framework view persists for itself.
    type State: Clone + fmt::Debug;

    /// Measure content of `intrinsic` size (`None` without content) the way
    /// the underlying framework view would.
    fn measure_natural(&self, constraints: Constraints, intrinsic: Option<Vec2>) -> BaseMeasure;

    /// Schedule a redraw.
    fn invalidate(&mut self);

    /// Schedule a new measure/layout pass.
    fn request_layout(&mut self);

    fn save_base_state(&self) -> Self::State;

    fn restore_base_state(&mut self, state: Self::State);
}

// ── DefaultHost ───────────────────────────────────────────────────────────

/// The framework view keeps nothing of its own in saved state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseState;

/// Stand-alone host: image-view measurement plus counters for redraw and
/// layout requests.
#[derive(Debug, Clone, Default)]
pub struct DefaultHost {
    pub params: LayoutParams,
    invalidations: u32,
    layout_requests: u32,
}

impl DefaultHost {
    pub fn new(params: LayoutParams) -> Self {
        Self { params, ..Self::default() }
    }

    /// How many redraws were requested since construction.
    #[inline]
    pub fn invalidations(&self) -> u32 {
        self.invalidations
    }

    /// How many re-layouts were requested since construction.
    #[inline]
    pub fn layout_requests(&self) -> u32 {
        self.layout_requests
    }
}

impl ViewHost for DefaultHost {
    type State = BaseState;

    fn measure_natural(&self, constraints: Constraints, intrinsic: Option<Vec2>) -> BaseMeasure {
        let spec_w = MeasureSpec::new(self.params.width, constraints.max.x);
        let spec_h = MeasureSpec::new(self.params.height, constraints.max.y);
        let desired = intrinsic.unwrap_or_else(Vec2::zero);
        let natural = Vec2::new(spec_w.resolve(desired.x), spec_h.resolve(desired.y));
        BaseMeasure {
            natural: constraints.constrain(natural).trunc(),
            proposed: Vec2::new(spec_w.size(), spec_h.size()).trunc(),
        }
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn request_layout(&mut self) {
        self.layout_requests += 1;
    }

    fn save_base_state(&self) -> BaseState {
        BaseState
    }

    fn restore_base_state(&mut self, _state: BaseState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(params: LayoutParams, c: Constraints, intrinsic: Option<Vec2>) -> BaseMeasure {
        DefaultHost::new(params).measure_natural(c, intrinsic)
    }

    // ── MeasureSpec ───────────────────────────────────────────────────────

    #[test]
    fn spec_from_dims() {
        assert_eq!(MeasureSpec::new(LayoutDim::Exact(40.0), 10.0), MeasureSpec::Exactly(40.0));
        assert_eq!(MeasureSpec::new(LayoutDim::Fill, 10.0), MeasureSpec::Exactly(10.0));
        assert_eq!(MeasureSpec::new(LayoutDim::Wrap, 10.0), MeasureSpec::AtMost(10.0));
        assert_eq!(MeasureSpec::new(LayoutDim::Wrap, f32::INFINITY), MeasureSpec::Unspecified);
    }

    #[test]
    fn unspecified_proposes_zero() {
        assert_eq!(MeasureSpec::Unspecified.size(), 0.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(17.0), 17.0);
    }

    // ── DefaultHost ───────────────────────────────────────────────────────

    #[test]
    fn wrap_takes_intrinsic_size_within_limit() {
        let m = measure(
            LayoutParams::default(),
            Constraints::loose(Vec2::new(100.0, 50.0)),
            Some(Vec2::new(80.0, 120.0)),
        );
        assert_eq!(m.natural, Vec2::new(80.0, 50.0));
        assert_eq!(m.proposed, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn exact_params_ignore_content() {
        let m = measure(
            LayoutParams::exact(300.0, 120.5),
            Constraints::loose(Vec2::splat(1000.0)),
            Some(Vec2::new(10.0, 10.0)),
        );
        assert_eq!(m.natural, Vec2::new(300.0, 120.0));
        assert_eq!(m.proposed, Vec2::new(300.0, 120.0));
    }

    #[test]
    fn no_content_wraps_to_zero() {
        let m = measure(LayoutParams::default(), Constraints::loose(Vec2::splat(64.0)), None);
        assert_eq!(m.natural, Vec2::zero());
    }

    #[test]
    fn requests_are_counted() {
        let mut host = DefaultHost::default();
        host.invalidate();
        host.invalidate();
        host.request_layout();
        assert_eq!((host.invalidations(), host.layout_requests()), (2, 1));
    }
}
