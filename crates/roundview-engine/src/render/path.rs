use resvg::tiny_skia::{self, Path, PathBuilder};

use crate::coords::{CornerRadii, Rect};
use crate::scene::DrawCmd;

/// Distance of a quarter-circle cubic's control points from its ends, as a
/// fraction of the radius.
const KAPPA: f32 = 0.552_284_8;

/// Device-space outline of a draw command, or `None` when it covers nothing.
pub fn path_of(cmd: &DrawCmd) -> Option<Path> {
    match cmd {
        DrawCmd::Rect(c) => rect_path(c.rect),
        DrawCmd::RoundedRect(c) => rounded_rect_path(c.rect, c.radii),
        DrawCmd::Circle(c) => PathBuilder::from_circle(c.center.x, c.center.y, c.radius),
    }
}

fn rect_path(rect: Rect) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let r = tiny_skia::Rect::from_xywh(rect.left(), rect.top(), rect.size.x, rect.size.y)?;
    Some(PathBuilder::from_rect(r))
}

/// Rectangle with a quarter-circle arc on each rounded corner.
///
/// Radii are clamped to half the shorter side.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let radii = radii.clamped(rect.size.min_element() / 2.0);
    if radii.is_zero() {
        return rect_path(rect);
    }

    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let CornerRadii { top_left: tl, top_right: tr, bottom_left: bl, bottom_right: br } = radii;
    let k = 1.0 - KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(l + tl, t);
    pb.line_to(r - tr, t);
    if tr > 0.0 {
        pb.cubic_to(r - tr * k, t, r, t + tr * k, r, t + tr);
    }
    pb.line_to(r, b - br);
    if br > 0.0 {
        pb.cubic_to(r, b - br * k, r - br * k, b, r - br, b);
    }
    pb.line_to(l + bl, b);
    if bl > 0.0 {
        pb.cubic_to(l + bl * k, b, l, b - bl * k, l, b - bl);
    }
    pb.line_to(l, t + tl);
    if tl > 0.0 {
        pb.cubic_to(l, t + tl * k, l + tl * k, t, l + tl, t);
    }
    pb.close();
    pb.finish()
}
