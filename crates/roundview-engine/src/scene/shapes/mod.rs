pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
