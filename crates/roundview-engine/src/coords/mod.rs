//! Coordinate and geometry types shared across the rasterizer and UI.
//!
//! Canonical space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::{Corner, CornerRadii};
pub use rect::Rect;
pub use vec2::Vec2;
