//! Cover image for video tiles.
//!
//! Landscape (and square) images are shown whole, scaled to fit and centered
//! in the box. Portrait images fill the box and are cropped around their
//! center, the way vertical video thumbnails are usually framed.

use std::rc::Rc;

use roundview_engine::bitmap::Drawable;
use roundview_engine::coords::{Rect, Vec2};
use roundview_engine::paint::ImagePaint;

use crate::constraints::Constraints;
use crate::host::{DefaultHost, ViewHost};
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::image::{DrawableId, ImageSource, ImageTransform, center_crop, fit_center};

/// Where the image lands inside a box: the sampling transform and the part
/// of the box it covers (box coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverPlacement {
    pub transform: ImageTransform,
    pub area: Rect,
}

/// Fit-center for `bitmap.x >= bitmap.y`, center-crop otherwise.
pub fn cover_placement(box_size: Vec2, bitmap: Vec2) -> CoverPlacement {
    if bitmap.x >= bitmap.y {
        let transform = fit_center(box_size, bitmap);
        let origin = Vec2::new(transform.translate_x, transform.translate_y);
        CoverPlacement { transform, area: Rect::from_origin_size(origin, transform.scaled_size(bitmap)) }
    } else {
        CoverPlacement { transform: center_crop(box_size, bitmap), area: Rect::from_size(box_size) }
    }
}

pub struct VideoCoverView<H: ViewHost = DefaultHost> {
    source: ImageSource,
    host: H,
}

impl VideoCoverView<DefaultHost> {
    pub fn new() -> Self {
        Self::with_host(DefaultHost::default())
    }
}

impl Default for VideoCoverView<DefaultHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ViewHost> VideoCoverView<H> {
    pub fn with_host(host: H) -> Self {
        Self { source: ImageSource::default(), host }
    }

    pub fn with_drawable(mut self, drawable: Rc<dyn Drawable>) -> Self {
        self.source.set(Some(drawable));
        self
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

    pub fn set_drawable(&mut self, drawable: Option<Rc<dyn Drawable>>) {
        self.source.set(drawable);
        self.host.request_layout();
        self.host.invalidate();
    }

    /// Only the framework view's own state is kept.
    pub fn save_state(&self) -> H::State {
        self.host.save_base_state()
    }

    pub fn restore_state(&mut self, state: H::State) {
        self.host.restore_base_state(state);
    }
}

impl<H: ViewHost + 'static> Widget for VideoCoverView<H> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.host.measure_natural(constraints, self.source.intrinsic_size()).natural
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(bitmap) = self.source.bitmap() else {
            return;
        };
        let placement = cover_placement(rect.size, bitmap.size());
        let area = Rect::from_origin_size(rect.origin + placement.area.origin, placement.area.size);
        log::trace!("video cover {:?} in {}x{}", placement.area, rect.size.x, rect.size.y);
        painter.fill_rect(area, ImagePaint::new(bitmap, placement.transform.to_transform(rect.origin)));
    }
}
