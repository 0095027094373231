//! An image view that clips its bitmap to a circle or a rounded rectangle.
//!
//! ```rust
//! use std::rc::Rc;
//! use roundview_ui::prelude::*;
//!
//! let photo = Rc::new(ColorDrawable::new(Color::from_straight(0.2, 0.4, 0.8, 1.0), 64, 48));
//! let view = RoundImageView::with_host(
//!     RoundImageConfig::new().shape(Shape::RoundRect).radius(8.0).aspect_ratio(2.0),
//!     DefaultHost::new(LayoutParams::exact(120.0, 300.0)),
//! )
//! .with_drawable(photo);
//!
//! assert_eq!(view.measure(Constraints::unbounded()), Vec2::new(120.0, 60.0));
//! ```

pub mod config;
pub mod geometry;
pub mod state;

use std::rc::Rc;

use roundview_engine::bitmap::Drawable;
use roundview_engine::coords::{Corner, CornerRadii, Rect, Vec2};
use roundview_engine::paint::ImagePaint;

use crate::constraints::Constraints;
use crate::host::{DefaultHost, ViewHost};
use crate::metrics::{DisplayMetrics, apply_dimension, dip_to_px};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::image::ImageSource;

pub use crate::widgets::image::{DrawableId, ImageTransform};
pub use config::{FitMode, RoundImageConfig, Shape};
pub use geometry::DerivedGeometry;
pub use state::SavedState;

// ── RoundImageView ────────────────────────────────────────────────────────

pub struct RoundImageView<H: ViewHost = DefaultHost> {
    /// `radius` is always resolved (`Some`) once the view exists.
    config: RoundImageConfig,
    source: ImageSource,
    metrics: Option<DisplayMetrics>,
    host: H,
}

impl RoundImageView<DefaultHost> {
    pub fn new(config: RoundImageConfig) -> Self {
        Self::with_host(config, DefaultHost::default())
    }
}

impl<H: ViewHost> RoundImageView<H> {
    pub fn with_host(mut config: RoundImageConfig, host: H) -> Self {
        config.radius = Some(config.resolved_radius().max(0.0));
        config.corners = config.corners.clamped(f32::INFINITY);
        Self { config, source: ImageSource::default(), metrics: None, host }
    }

    /// Display metrics used by the dp setters. Without them every dp value
    /// converts to zero pixels.
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Initial image. Unlike [`set_drawable`](Self::set_drawable) this does
    /// not notify the host.
    pub fn with_drawable(mut self, drawable: Rc<dyn Drawable>) -> Self {
        self.source.set(Some(drawable));
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &RoundImageConfig {
        &self.config
    }

    pub fn shape(&self) -> Shape {
        self.config.shape
    }

    /// Uniform radius in device pixels.
    pub fn radius(&self) -> f32 {
        self.config.radius.unwrap_or(0.0)
    }

    pub fn corners(&self) -> CornerRadii {
        self.config.corners
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.aspect_ratio
    }

    pub fn fit_mode(&self) -> FitMode {
        self.config.fit
    }

    pub fn drawable(&self) -> Option<&Rc<dyn Drawable>> {
        self.source.drawable()
    }

    pub fn drawable_id(&self) -> Option<DrawableId> {
        self.source.id()
    }

    pub fn metrics(&self) -> Option<&DisplayMetrics> {
        self.metrics.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Geometry a paint pass at `box_size` would use, or `None` without an image.
    pub fn geometry(&self, box_size: Vec2) -> Option<DerivedGeometry> {
        let bitmap = self.source.bitmap()?;
        Some(DerivedGeometry::compute(&self.config, box_size, bitmap.size()))
    }

    // ── mutators ──────────────────────────────────────────────────────────

    /// Set the uniform radius. The dp value is scaled and truncated; redraws
    /// only when the pixel value changes.
    pub fn set_radius(&mut self, dp: i32) {
        let px = apply_dimension(self.metrics.as_ref(), dp).max(0) as f32;
        if self.radius() != px {
            log::trace!("radius {} -> {px}", self.radius());
            self.config.radius = Some(px);
            self.host.invalidate();
        }
    }

    /// Round both left corners with `dp`.
    pub fn set_left_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::TopLeft, Corner::BottomLeft], dp);
    }

    /// Round both right corners with `dp`.
    pub fn set_right_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::TopRight, Corner::BottomRight], dp);
    }

    pub fn set_left_top_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::TopLeft], dp);
    }

    pub fn set_right_top_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::TopRight], dp);
    }

    pub fn set_left_bottom_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::BottomLeft], dp);
    }

    pub fn set_right_bottom_radius(&mut self, dp: i32) {
        self.set_corners(&[Corner::BottomRight], dp);
    }

    /// The touched corners and the uniform radius all take the new value,
    /// rounded to the nearest pixel.
    fn set_corners(&mut self, corners: &[Corner], dp: i32) {
        let px = dip_to_px(self.metrics.as_ref(), dp).max(0) as f32;
        for &corner in corners {
            self.config.corners.set(corner, px);
        }
        self.config.radius = Some(px);
        log::trace!("corners {corners:?} -> {px}");
        self.host.invalidate();
    }

    /// Set the shape from a raw code, coercing unknown codes to circle.
    pub fn set_type(&mut self, raw: i32) {
        if self.config.shape.raw() != raw {
            self.config.shape = Shape::from_raw(raw);
            log::trace!("shape code {raw} -> {:?}", self.config.shape);
            self.host.request_layout();
        }
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.set_type(shape.raw());
    }

    /// Always re-lays out, even for the current value.
    pub fn set_aspect_ratio(&mut self, ratio: f32) {
        self.config.aspect_ratio = ratio;
        self.host.request_layout();
    }

    pub fn set_fixed_size(&mut self, width: i32, height: i32) {
        self.config.fixed_size = Some((width, height));
        self.host.request_layout();
        self.host.invalidate();
    }

    pub fn set_fit_mode(&mut self, fit: FitMode) {
        if self.config.fit != fit {
            self.config.fit = fit;
            self.host.invalidate();
        }
    }

    /// Replace the image. The decoded buffer of the previous one is dropped.
    pub fn set_drawable(&mut self, drawable: Option<Rc<dyn Drawable>>) {
        self.source.set(drawable);
        self.host.request_layout();
        self.host.invalidate();
    }

    // ── instance state ────────────────────────────────────────────────────

    pub fn save_state(&self) -> SavedState<H::State> {
        SavedState { base: self.host.save_base_state(), shape: self.config.shape, radius: self.radius() }
    }

    /// Restore shape and uniform radius; everything else stays as configured.
    pub fn restore_state(&mut self, state: SavedState<H::State>) {
        self.host.restore_base_state(state.base);
        self.config.shape = state.shape;
        self.config.radius = Some(state.radius.max(0.0));
    }
}

impl<H: ViewHost + 'static> Widget for RoundImageView<H> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let base = self.host.measure_natural(constraints, self.source.intrinsic_size());
        let size = geometry::measure_box(&self.config, base);
        log::trace!("measured {:?} box {}x{}", self.config.shape, size.x, size.y);
        size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(bitmap) = self.source.bitmap() else {
            return;
        };
        let geometry = DerivedGeometry::compute(&self.config, rect.size, bitmap.size());
        let fill = ImagePaint::new(bitmap, geometry.transform.to_transform(rect.origin));

        match self.config.shape {
            Shape::Circle => {
                let r = geometry.circle_radius;
                painter.fill_circle(rect.origin + Vec2::splat(r), r, fill);
            }
            Shape::RoundRect => {
                let clip = Rect::from_origin_size(rect.origin, geometry.clip_rect.size);
                let radius = self.radius();
                painter.fill_rounded_rect(clip, radius, fill.clone());

                // Square off corners whose own radius is zero.
                let corners = self.config.corners;
                if !corners.is_zero() {
                    for corner in Corner::ALL.into_iter().filter(|&c| corners.get(c) == 0.0) {
                        painter.fill_rect(clip.corner_square(corner, radius), fill.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use roundview_engine::bitmap::{Bitmap, BitmapDrawable, ColorDrawable, PixelFormat};
    use roundview_engine::paint::Color;
    use roundview_engine::render::Canvas;
    use roundview_engine::scene::{DrawCmd, DrawList};

    use super::*;
    use crate::host::LayoutParams;
    use crate::scene::UiScene;
    use crate::widget::Element;

    fn red(w: u32, h: u32) -> Rc<dyn Drawable> {
        Rc::new(ColorDrawable::new(Color::from_straight(1.0, 0.0, 0.0, 1.0), w, h))
    }

    fn sized(config: RoundImageConfig, w: f32, h: f32) -> RoundImageView {
        RoundImageView::with_host(config, DefaultHost::new(LayoutParams::exact(w, h)))
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    /// Three equal bands, red then green then blue, left to right when
    /// `across` and top to bottom otherwise.
    fn bands(w: u32, h: u32, across: bool) -> Rc<dyn Drawable> {
        let mut bmp = Bitmap::new(w, h, PixelFormat::Rgba8888);
        for y in 0..h {
            for x in 0..w {
                let band = if across { x * 3 / w } else { y * 3 / h };
                bmp.set_pixel(x, y, [RED, GREEN, BLUE][band as usize]);
            }
        }
        Rc::new(BitmapDrawable::new(bmp))
    }

    /// Paints `view` into `rect` on a `w`x`h` canvas.
    fn render_at(view: &RoundImageView, rect: Rect, w: u32, h: u32) -> Canvas {
        let mut list = DrawList::new();
        view.paint(&mut Painter::new(&mut list), rect);
        let mut canvas = Canvas::new(w, h).unwrap();
        canvas.draw_list(&list);
        canvas
    }

    fn paint_cmds(view: &RoundImageView, rect: Rect) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        view.paint(&mut Painter::new(&mut list), rect);
        list.cmds().to_vec()
    }

    /// Counts how often it is asked to paint itself.
    struct CountingDrawable {
        draws: Rc<Cell<u32>>,
    }

    impl Drawable for CountingDrawable {
        fn intrinsic_size(&self) -> (u32, u32) {
            (4, 4)
        }
        fn is_opaque(&self) -> bool {
            false
        }
        fn draw(&self, _target: &mut Bitmap) {
            self.draws.set(self.draws.get() + 1);
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_resolves_radius_from_corners() {
        let view = RoundImageView::new(
            RoundImageConfig::new().corner(Corner::TopLeft, 6.0).corner(Corner::TopRight, 3.0),
        );
        assert_eq!(view.radius(), 6.0);
        assert_eq!(view.config().radius, Some(6.0));
    }

    // ── measurement ───────────────────────────────────────────────────────

    #[test]
    fn circle_measures_square_from_smaller_proposed_side() {
        let view = sized(RoundImageConfig::new(), 180.0, 120.0).with_drawable(red(10, 10));
        assert_eq!(view.measure(Constraints::unbounded()), Vec2::splat(120.0));
    }

    #[test]
    fn round_rect_with_aspect_ratio() {
        let view = sized(RoundImageConfig::new().shape(Shape::RoundRect).aspect_ratio(2.0), 200.0, 50.0);
        assert_eq!(view.measure(Constraints::unbounded()), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn fixed_size_uses_parent_width() {
        let view = RoundImageView::new(RoundImageConfig::new().fixed_size(4, 3)).with_drawable(red(8, 8));
        let size = view.measure(Constraints::loose(Vec2::new(300.0, 40.0)));
        assert_eq!(size, Vec2::new(300.0, 225.0));
    }

    #[test]
    fn wrap_uses_intrinsic_size() {
        let view = RoundImageView::new(RoundImageConfig::new().shape(Shape::RoundRect)).with_drawable(red(64, 48));
        assert_eq!(view.measure(Constraints::loose(Vec2::splat(500.0))), Vec2::new(64.0, 48.0));
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[test]
    fn set_radius_twice_redraws_once() {
        let mut view = RoundImageView::new(RoundImageConfig::new()).with_metrics(DisplayMetrics::new(2.0));
        view.set_radius(6);
        view.set_radius(6);
        assert_eq!(view.radius(), 12.0);
        assert_eq!(view.host().invalidations(), 1);
    }

    #[test]
    fn set_radius_truncates_but_corner_setters_round() {
        let mut view = RoundImageView::new(RoundImageConfig::new()).with_metrics(DisplayMetrics::new(1.5));
        view.set_radius(3);
        assert_eq!(view.radius(), 4.0);
        view.set_left_top_radius(3);
        assert_eq!(view.radius(), 5.0);
    }

    #[test]
    fn set_radius_without_metrics_converts_to_zero() {
        let mut view = RoundImageView::new(RoundImageConfig::new());
        view.set_radius(6);
        assert_eq!(view.radius(), 0.0);
        assert_eq!(view.host().invalidations(), 0);
    }

    #[test]
    fn side_setters_update_both_corners_and_radius() {
        let mut view = RoundImageView::new(RoundImageConfig::new()).with_metrics(DisplayMetrics::new(1.5));
        view.set_left_radius(4);
        assert_eq!(view.corners(), CornerRadii::new(6.0, 0.0, 6.0, 0.0));
        view.set_right_radius(2);
        assert_eq!(view.corners(), CornerRadii::new(6.0, 3.0, 6.0, 3.0));
        assert_eq!(view.radius(), 3.0);
        assert_eq!(view.host().invalidations(), 2);
    }

    #[test]
    fn single_corner_setters() {
        let mut view = RoundImageView::new(RoundImageConfig::new()).with_metrics(DisplayMetrics::new(1.0));
        view.set_left_top_radius(1);
        view.set_right_top_radius(2);
        view.set_left_bottom_radius(3);
        view.set_right_bottom_radius(4);
        assert_eq!(view.corners(), CornerRadii::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(view.radius(), 4.0);
    }

    #[test]
    fn out_of_range_type_becomes_circle() {
        let mut view = RoundImageView::new(RoundImageConfig::new().shape(Shape::RoundRect));
        view.set_type(7);
        assert_eq!(view.shape(), Shape::Circle);
        assert_eq!(view.host().layout_requests(), 1);
    }

    #[test]
    fn set_type_to_current_code_is_noop() {
        let mut view = RoundImageView::new(RoundImageConfig::new());
        view.set_type(0);
        view.set_shape(Shape::Circle);
        assert_eq!(view.host().layout_requests(), 0);
        view.set_shape(Shape::RoundRect);
        assert_eq!(view.shape(), Shape::RoundRect);
        assert_eq!(view.host().layout_requests(), 1);
    }

    #[test]
    fn set_aspect_ratio_always_relayouts() {
        let mut view = RoundImageView::new(RoundImageConfig::new());
        view.set_aspect_ratio(1.5);
        view.set_aspect_ratio(1.5);
        assert_eq!(view.aspect_ratio(), 1.5);
        assert_eq!(view.host().layout_requests(), 2);
    }

    #[test]
    fn set_fit_mode_redraws_on_change_only() {
        let mut view = RoundImageView::new(RoundImageConfig::new());
        view.set_fit_mode(FitMode::Crop);
        view.set_fit_mode(FitMode::Fill);
        assert_eq!(view.fit_mode(), FitMode::Fill);
        assert_eq!(view.host().invalidations(), 1);
    }

    // ── save / restore ────────────────────────────────────────────────────

    #[test]
    fn save_restore_round_trips_shape_and_radius_only() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).radius(14.0);
        let saved = RoundImageView::new(config.clone().corner(Corner::TopLeft, 3.0).aspect_ratio(2.0)).save_state();
        assert_eq!((saved.shape, saved.radius), (Shape::RoundRect, 14.0));

        let mut fresh = RoundImageView::new(RoundImageConfig::new());
        fresh.restore_state(saved);
        assert_eq!(fresh.shape(), Shape::RoundRect);
        assert_eq!(fresh.radius(), 14.0);
        assert_eq!(fresh.corners(), CornerRadii::zero());
        assert_eq!(fresh.aspect_ratio(), 0.0);
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn no_drawable_paints_nothing() {
        let view = RoundImageView::new(RoundImageConfig::new());
        assert!(paint_cmds(&view, Rect::new(0.0, 0.0, 50.0, 50.0)).is_empty());
    }

    #[test]
    fn circle_is_one_circle_at_its_radius() {
        let view = RoundImageView::new(RoundImageConfig::new()).with_drawable(red(10, 10));
        let cmds = paint_cmds(&view, Rect::new(5.0, 5.0, 41.0, 41.0));
        assert_eq!(cmds.len(), 1);
        let DrawCmd::Circle(circle) = &cmds[0] else { panic!("expected a circle, got {:?}", cmds[0]) };
        assert_eq!(circle.radius, 20.0);
        assert_eq!(circle.center, Vec2::new(25.0, 25.0));
    }

    #[test]
    fn uniform_round_rect_is_single_command() {
        let view = RoundImageView::new(RoundImageConfig::new().shape(Shape::RoundRect).radius(8.0)).with_drawable(red(10, 10));
        let cmds = paint_cmds(&view, Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(cmds.len(), 1);
        assert!(matches!(&cmds[0], DrawCmd::RoundedRect(r) if r.radii == CornerRadii::all(8.0)));
    }

    #[test]
    fn zero_corners_get_square_patches() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).corner(Corner::TopLeft, 10.0);
        let view = RoundImageView::new(config).with_drawable(red(10, 10));
        let cmds = paint_cmds(&view, Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(cmds.len(), 4);
        let patches: Vec<Rect> = cmds[1..].iter().map(DrawCmd::bounds).collect();
        assert_eq!(patches, vec![
            Rect::new(30.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 20.0, 10.0, 10.0),
            Rect::new(30.0, 20.0, 10.0, 10.0),
        ]);
    }

    #[test]
    fn squared_corner_is_opaque_and_rounded_corner_is_clear() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).corner(Corner::TopLeft, 10.0);
        let root = Element::new(sized(config, 40.0, 40.0).with_drawable(red(40, 40)));
        let canvas = UiScene::new().render(&root, Vec2::splat(100.0), Color::transparent()).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (40, 40));
        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(39, 0), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(0, 39), [255, 0, 0, 255]);
        assert_eq!(canvas.pixel(39, 39), [255, 0, 0, 255]);
    }

    #[test]
    fn circle_leaves_box_corners_transparent() {
        let root = Element::new(sized(RoundImageConfig::new(), 40.0, 40.0).with_drawable(red(8, 8)));
        let canvas = UiScene::new().render(&root, Vec2::splat(100.0), Color::transparent()).unwrap();
        for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
            assert_eq!(canvas.pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        assert_eq!(canvas.pixel(20, 20), [255, 0, 0, 255]);
    }

    #[test]
    fn crop_shows_the_middle_of_a_wide_image() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).radius(0.0);
        let view = RoundImageView::new(config).with_drawable(bands(30, 10, true));
        let canvas = render_at(&view, Rect::new(0.0, 0.0, 10.0, 10.0), 10, 10);
        for (x, y) in [(0, 0), (9, 0), (5, 5), (0, 9), (9, 9)] {
            assert_eq!(canvas.pixel(x, y), GREEN, "({x}, {y})");
        }
    }

    #[test]
    fn center_crop_shows_the_middle_of_a_tall_image_and_crop_the_top() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).radius(0.0);
        let mut view = RoundImageView::new(config).with_drawable(bands(10, 30, false));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let canvas = render_at(&view, rect, 10, 10);
        assert_eq!(canvas.pixel(5, 0), RED);
        assert_eq!(canvas.pixel(5, 9), RED);

        view.set_fit_mode(FitMode::CenterCrop);
        let canvas = render_at(&view, rect, 10, 10);
        assert_eq!(canvas.pixel(5, 0), GREEN);
        assert_eq!(canvas.pixel(5, 9), GREEN);
    }

    #[test]
    fn circle_shrinks_image_by_its_longer_side() {
        // 10x40, top half red and bottom half blue, squeezed to 5x20.
        let mut bmp = Bitmap::new(10, 40, PixelFormat::Rgba8888);
        for y in 0..40 {
            for x in 0..10 {
                bmp.set_pixel(x, y, if y < 20 { RED } else { BLUE });
            }
        }
        let view = RoundImageView::new(RoundImageConfig::new()).with_drawable(Rc::new(BitmapDrawable::new(bmp)));
        let canvas = render_at(&view, Rect::new(0.0, 0.0, 20.0, 20.0), 20, 20);
        assert_eq!(canvas.pixel(10, 4), RED);
        assert_eq!(canvas.pixel(10, 15), BLUE);
    }

    #[test]
    fn offset_round_rect_moves_image_and_corner_patches_together() {
        let config = RoundImageConfig::new().shape(Shape::RoundRect).corner(Corner::TopLeft, 4.0);
        let view = RoundImageView::new(config).with_drawable(bands(30, 9, true));
        let canvas = render_at(&view, Rect::new(10.0, 20.0, 30.0, 9.0), 50, 40);

        assert_eq!(canvas.pixel(10, 20)[3], 0, "rounded top-left");
        assert_eq!(canvas.pixel(39, 20), BLUE, "squared top-right");
        assert_eq!(canvas.pixel(10, 28), RED, "squared bottom-left");
        assert_eq!(canvas.pixel(39, 28), BLUE, "squared bottom-right");
        assert_eq!(canvas.pixel(25, 24), GREEN);
        assert_eq!(canvas.pixel(9, 24)[3], 0);
        assert_eq!(canvas.pixel(40, 24)[3], 0);
        assert_eq!(canvas.pixel(25, 19)[3], 0);
    }

    // ── decode cache ──────────────────────────────────────────────────────

    #[test]
    fn drawable_is_decoded_once_until_replaced() {
        let draws = Rc::new(Cell::new(0));
        let mut view = RoundImageView::new(RoundImageConfig::new())
            .with_drawable(Rc::new(CountingDrawable { draws: Rc::clone(&draws) }));
        let rect = Rect::new(0.0, 0.0, 20.0, 20.0);
        paint_cmds(&view, rect);
        paint_cmds(&view, Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_eq!(draws.get(), 1);

        view.set_drawable(Some(Rc::new(CountingDrawable { draws: Rc::clone(&draws) })));
        paint_cmds(&view, rect);
        assert_eq!(draws.get(), 2);
        assert_eq!((view.host().layout_requests(), view.host().invalidations()), (1, 1));
    }

    #[test]
    fn clearing_the_drawable_stops_painting() {
        let mut view = RoundImageView::new(RoundImageConfig::new()).with_drawable(red(4, 4));
        view.set_drawable(None);
        assert!(view.drawable_id().is_none());
        assert!(paint_cmds(&view, Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}
