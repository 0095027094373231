//! CPU rendering on top of tiny-skia.
//!
//! Draw commands become tiny-skia paths and are filled, anti-aliased, into a
//! [`Canvas`] pixmap in paint order.
//!
//! Convention:
//! - geometry is in device pixels (top-left origin, +Y down)

mod canvas;
mod path;

pub use canvas::Canvas;
pub use path::{path_of, rounded_rect_path};
