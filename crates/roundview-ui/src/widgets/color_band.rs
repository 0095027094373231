//! An image drawn in grayscale except for a full-color band along the bottom.
//!
//! The band's height is a fraction of the view (the *progress*), which makes
//! the view usable as an image-shaped progress meter. The image is stretched
//! to the box on both axes.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use roundview_engine::bitmap::{Bitmap, Drawable};
use roundview_engine::coords::{Rect, Vec2};
use roundview_engine::paint::ImagePaint;

use crate::constraints::Constraints;
use crate::host::{DefaultHost, ViewHost};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::image::{Cached, DrawableId, ImageSource, ImageTransform, cached, stretch};

/// Progress of a freshly created view.
pub const DEFAULT_PROGRESS: f32 = 0.5;

/// The full-color strip: which part of the box it covers and how the bitmap
/// is placed under it (box coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub area: Rect,
    pub transform: ImageTransform,
}

/// Band for `progress` in `[0, 1]`, or `None` when it spans no whole bitmap row.
///
/// The band takes `trunc(h × progress)` bitmap rows starting at row
/// `trunc(h × (1 - progress))`, stretched like the rest of the image, with
/// its top edge at `box_h × (1 - progress)`.
pub fn color_band(box_size: Vec2, bitmap: Vec2, progress: f32) -> Option<ColorBand> {
    let rows = (bitmap.y * progress).trunc();
    if rows <= 0.0 {
        return None;
    }
    let first_row = (bitmap.y * (1.0 - progress)).trunc();
    let mut transform = stretch(box_size, bitmap);
    let top = box_size.y * (1.0 - progress);
    transform.translate_y = top - first_row * transform.scale_y;
    Some(ColorBand { area: Rect::new(0.0, top, box_size.x, rows * transform.scale_y), transform })
}

pub struct ColorBandView<H: ViewHost = DefaultHost> {
    source: ImageSource,
    gray: RefCell<Option<Cached>>,
    progress: f32,
    host: H,
}

impl ColorBandView<DefaultHost> {
    pub fn new() -> Self {
        Self::with_host(DefaultHost::default())
    }
}

impl Default for ColorBandView<DefaultHost> {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) }
}

impl<H: ViewHost> ColorBandView<H> {
    pub fn with_host(host: H) -> Self {
        Self { source: ImageSource::default(), gray: RefCell::new(None), progress: DEFAULT_PROGRESS, host }
    }

    pub fn with_drawable(mut self, drawable: Rc<dyn Drawable>) -> Self {
        self.source.set(Some(drawable));
        self
    }

    /// Initial progress, without notifying the host.
    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = clamp_progress(progress);
        self
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn drawable(&self) -> Option<&Rc<dyn Drawable>> {
        self.source.drawable()
    }

    pub fn drawable_id(&self) -> Option<DrawableId> {
        self.source.id()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Fraction of the height shown in color, clamped to `[0, 1]` (NaN is 0).
    /// Always redraws.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = clamp_progress(progress);
        log::trace!("color band progress -> {}", self.progress);
        self.host.invalidate();
    }

    pub fn set_drawable(&mut self, drawable: Option<Rc<dyn Drawable>>) {
        self.source.set(drawable);
        self.gray.replace(None);
        self.host.request_layout();
        self.host.invalidate();
    }

    /// Grayscale copy of `color`, made once per drawable.
    fn gray(&self, id: DrawableId, color: &Bitmap) -> Option<Arc<Bitmap>> {
        cached(&self.gray, id, || {
            log::debug!("desaturating {id:?}");
            Some(Arc::new(color.desaturated()))
        })
    }
}

impl<H: ViewHost + 'static> Widget for ColorBandView<H> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.host.measure_natural(constraints, self.source.intrinsic_size()).natural
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (Some(id), Some(color)) = (self.source.id(), self.source.bitmap()) else {
            return;
        };
        let Some(gray) = self.gray(id, &color) else {
            return;
        };
        let size = color.size();
        let base = stretch(rect.size, size);
        painter.fill_rect(rect, ImagePaint::new(gray, base.to_transform(rect.origin)));

        if let Some(band) = color_band(rect.size, size, self.progress) {
            let area = Rect::from_origin_size(rect.origin + band.area.origin, band.area.size);
            painter.fill_rect(area, ImagePaint::new(color, band.transform.to_transform(rect.origin)));
        }
    }
}
