pub mod color_band;
pub mod flex;
pub mod image;
pub mod round_image;
pub mod video_cover;
