use super::config::Shape;

/// Instance state carried across a save/restore cycle.
///
/// Only the shape and the uniform radius survive; corner radii, aspect ratio,
/// fit mode and fixed size are expected to be supplied again by whoever
/// declares the view.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState<B> {
    /// Whatever the host framework view saved for itself.
    pub base: B,
    pub shape: Shape,
    /// Uniform radius in device pixels.
    pub radius: f32,
}
