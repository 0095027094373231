//! roundview UI: a small retained widget layer on top of `roundview-engine`,
//! centred on [`RoundImageView`](widgets::round_image::RoundImageView), with
//! two sibling image views for video covers and progress bands.
//!
//! # Quick start
//!
//! ```rust
//! use std::rc::Rc;
//! use roundview_ui::prelude::*;
//!
//! let photo = Rc::new(ColorDrawable::new(Color::from_straight(0.9, 0.6, 0.1, 1.0), 32, 32));
//! let avatar = RoundImageView::with_host(RoundImageConfig::new(), DefaultHost::new(LayoutParams::exact(48.0, 48.0)))
//!     .with_drawable(photo);
//!
//! let mut scene = UiScene::new();
//! let canvas = scene.render(&avatar.into(), Vec2::new(100.0, 100.0), Color::transparent()).unwrap();
//! assert_eq!((canvas.width(), canvas.height()), (48, 48));
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted.

pub mod constraints;
pub mod dsl;
pub mod host;
pub mod metrics;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::host::{BaseState, DefaultHost, LayoutDim, LayoutParams, ViewHost};
    pub use crate::metrics::DisplayMetrics;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        color_band::ColorBandView,
        flex::{Align, Column, Row},
        image::DrawableId,
        round_image::{FitMode, RoundImageConfig, RoundImageView, SavedState, Shape},
        video_cover::VideoCoverView,
    };

    // Engine primitives everyone needs.
    pub use roundview_engine::bitmap::{Bitmap, BitmapDrawable, ColorDrawable, Drawable};
    pub use roundview_engine::coords::{Corner, CornerRadii, Rect, Vec2};
    pub use roundview_engine::paint::{Color, Paint, Transform};

    // DSL
    pub use crate::dsl::{BuildError, DslBindings, DslLoader};
}
