//! Pieces shared by the image views: the drawable slot with its decode
//! cache, and the bitmap-to-box transform.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use roundview_engine::bitmap::{Bitmap, Drawable, rasterize};
use roundview_engine::coords::Vec2;
use roundview_engine::paint::Transform;

// ── DrawableId ────────────────────────────────────────────────────────────

/// Identity of a drawable as seen by one view, assigned when it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(u64);

impl DrawableId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A buffer derived from one particular drawable.
pub(crate) struct Cached {
    pub id: DrawableId,
    pub bitmap: Arc<Bitmap>,
}

/// Looks `id` up in a one-slot cache, filling it with `make` on a miss.
pub(crate) fn cached(
    slot: &RefCell<Option<Cached>>,
    id: DrawableId,
    make: impl FnOnce() -> Option<Arc<Bitmap>>,
) -> Option<Arc<Bitmap>> {
    let mut slot = slot.borrow_mut();
    if let Some(hit) = slot.as_ref().filter(|c| c.id == id) {
        return Some(Arc::clone(&hit.bitmap));
    }
    let bitmap = make()?;
    *slot = Some(Cached { id, bitmap: Arc::clone(&bitmap) });
    Some(bitmap)
}

// ── ImageSource ───────────────────────────────────────────────────────────

struct Source {
    id: DrawableId,
    drawable: Rc<dyn Drawable>,
}

/// The drawable a view shows, decoded into a pixel buffer at most once.
#[derive(Default)]
pub struct ImageSource {
    source: Option<Source>,
    decoded: RefCell<Option<Cached>>,
}

impl ImageSource {
    pub fn new(drawable: Option<Rc<dyn Drawable>>) -> Self {
        let mut source = Self::default();
        source.set(drawable);
        source
    }

    /// Replace the drawable; the previous decoded buffer is dropped.
    pub fn set(&mut self, drawable: Option<Rc<dyn Drawable>>) {
        self.source = drawable.map(|drawable| Source { id: DrawableId::next(), drawable });
        self.decoded.replace(None);
    }

    pub fn drawable(&self) -> Option<&Rc<dyn Drawable>> {
        self.source.as_ref().map(|s| &s.drawable)
    }

    pub fn id(&self) -> Option<DrawableId> {
        self.source.as_ref().map(|s| s.id)
    }

    pub fn intrinsic_size(&self) -> Option<Vec2> {
        self.drawable().map(|d| {
            let (w, h) = d.intrinsic_size();
            Vec2::new(w as f32, h as f32)
        })
    }

    /// The image as a pixel buffer. Drawables without an intrinsic size have none.
    pub fn bitmap(&self) -> Option<Arc<Bitmap>> {
        let source = self.source.as_ref()?;
        cached(&self.decoded, source.id, || {
            let bitmap = rasterize(source.drawable.as_ref())?;
            log::debug!("decoded {:?} into {}x{} buffer", source.id, bitmap.width(), bitmap.height());
            Some(bitmap)
        })
    }
}

// ── ImageTransform ────────────────────────────────────────────────────────

/// Scale about the origin followed by a translation, mapping bitmap pixels
/// into box coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ImageTransform {
    pub const IDENTITY: Self = Self { scale_x: 1.0, scale_y: 1.0, translate_x: 0.0, translate_y: 0.0 };

    /// Pattern matrix for a box whose top-left corner sits at `origin`.
    pub fn to_transform(self, origin: Vec2) -> Transform {
        Transform::from_scale(self.scale_x, self.scale_y)
            .post_translate(self.translate_x + origin.x, self.translate_y + origin.y)
    }

    /// Size of the bitmap once scaled.
    pub fn scaled_size(self, bitmap: Vec2) -> Vec2 {
        Vec2::new(bitmap.x * self.scale_x, bitmap.y * self.scale_y)
    }
}

/// Each axis stretched to the box on its own.
pub fn stretch(box_size: Vec2, bitmap: Vec2) -> ImageTransform {
    if bitmap.x <= 0.0 || bitmap.y <= 0.0 {
        return ImageTransform::IDENTITY;
    }
    ImageTransform { scale_x: box_size.x / bitmap.x, scale_y: box_size.y / bitmap.y, translate_x: 0.0, translate_y: 0.0 }
}

/// Uniform `scale`, with the overflow split evenly on both axes.
pub fn centered(box_size: Vec2, bitmap: Vec2, scale: f32) -> ImageTransform {
    ImageTransform {
        scale_x: scale,
        scale_y: scale,
        translate_x: -(bitmap.x * scale - box_size.x) / 2.0,
        translate_y: -(bitmap.y * scale - box_size.y) / 2.0,
    }
}

/// Largest uniform scale that keeps the whole bitmap inside the box, centered.
pub fn fit_center(box_size: Vec2, bitmap: Vec2) -> ImageTransform {
    if bitmap.x <= 0.0 || bitmap.y <= 0.0 {
        return ImageTransform::IDENTITY;
    }
    let scale = (box_size.x / bitmap.x).min(box_size.y / bitmap.y);
    centered(box_size, bitmap, scale)
}

/// Smallest uniform scale that covers the box, centered on both axes.
pub fn center_crop(box_size: Vec2, bitmap: Vec2) -> ImageTransform {
    if bitmap.x <= 0.0 || bitmap.y <= 0.0 {
        return ImageTransform::IDENTITY;
    }
    let scale = (box_size.x / bitmap.x).max(box_size.y / bitmap.y);
    centered(box_size, bitmap, scale)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use roundview_engine::bitmap::PixelFormat;

    use super::*;

    struct Counting(Rc<Cell<u32>>);

    impl Drawable for Counting {
        fn intrinsic_size(&self) -> (u32, u32) {
            (2, 3)
        }
        fn is_opaque(&self) -> bool {
            false
        }
        fn draw(&self, _target: &mut Bitmap) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn source_decodes_once_per_drawable() {
        let draws = Rc::new(Cell::new(0));
        let mut source = ImageSource::new(Some(Rc::new(Counting(Rc::clone(&draws)))));
        assert_eq!(source.intrinsic_size(), Some(Vec2::new(2.0, 3.0)));
        source.bitmap();
        source.bitmap();
        assert_eq!(draws.get(), 1);

        let first = source.id();
        source.set(Some(Rc::new(Counting(Rc::clone(&draws)))));
        assert_ne!(source.id(), first);
        source.bitmap();
        assert_eq!(draws.get(), 2);
    }

    #[test]
    fn empty_source_has_nothing() {
        let source = ImageSource::default();
        assert!(source.id().is_none());
        assert!(source.bitmap().is_none());
        assert!(source.intrinsic_size().is_none());
    }

    #[test]
    fn cache_slot_rebuilds_for_a_new_id() {
        let slot = RefCell::new(None);
        let (a, b) = (DrawableId::next(), DrawableId::next());
        let make = || Some(Arc::new(Bitmap::new(1, 1, PixelFormat::Rgba8888)));
        let first = cached(&slot, a, make).unwrap();
        assert!(Arc::ptr_eq(&first, &cached(&slot, a, || None).unwrap()));
        assert!(cached(&slot, b, || None).is_none());
    }

    #[test]
    fn transform_adds_box_origin_to_translation() {
        let t = ImageTransform { scale_x: 2.0, scale_y: 3.0, translate_x: -5.0, translate_y: 1.0 };
        let m = t.to_transform(Vec2::new(10.0, 20.0));
        assert_eq!((m.sx, m.sy, m.tx, m.ty), (2.0, 3.0, 5.0, 21.0));
        assert_eq!((m.kx, m.ky), (0.0, 0.0));
    }

    #[test]
    fn fit_center_letterboxes_wide_bitmap() {
        let t = fit_center(Vec2::splat(40.0), Vec2::new(20.0, 10.0));
        assert_eq!(t, ImageTransform { scale_x: 2.0, scale_y: 2.0, translate_x: 0.0, translate_y: 10.0 });
        assert_eq!(t.scaled_size(Vec2::new(20.0, 10.0)), Vec2::new(40.0, 20.0));
    }

    #[test]
    fn center_crop_splits_overflow_on_both_axes() {
        let t = center_crop(Vec2::splat(10.0), Vec2::new(10.0, 30.0));
        assert_eq!(t, ImageTransform { scale_x: 1.0, scale_y: 1.0, translate_x: 0.0, translate_y: -10.0 });
    }

    #[test]
    fn stretch_scales_axes_independently() {
        let t = stretch(Vec2::new(100.0, 60.0), Vec2::new(50.0, 20.0));
        assert_eq!(t, ImageTransform { scale_x: 2.0, scale_y: 3.0, translate_x: 0.0, translate_y: 0.0 });
        assert_eq!(stretch(Vec2::splat(5.0), Vec2::zero()), ImageTransform::IDENTITY);
    }
}
