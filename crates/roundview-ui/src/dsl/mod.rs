//! Builds widgets from `.mkml` documents.
//!
//! ## Format
//!
//! ```mkml
//! Row {
//!     gap: 8dp
//!     RoundImageView "avatar.png" { id: avatar  width: 48dp  height: 48dp }
//!     RoundImageView "cover.jpg" {
//!         id: cover
//!         shape: round
//!         radius: 12dp
//!         left_bottom_radius: 0
//!         aspect_ratio: 1.5
//!         width: 160dp
//!     }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roundview_ui::dsl::{DslBindings, DslLoader, FileAssets};
//! use roundview_ui::metrics::DisplayMetrics;
//!
//! let bindings = DslBindings::new(FileAssets::new("assets"))
//!     .with_metrics(DisplayMetrics::new(2.0));
//! let views = DslLoader::new()
//!     .load(&std::fs::read_to_string("assets/profile.mkml")?, &bindings)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;

pub use builder::{AssetSource, BuiltView, DslBindings, DslLoader, FileAssets};
pub use error::BuildError;
pub use roundview_mkml::{DslDocument, ParseError, parse_str};
