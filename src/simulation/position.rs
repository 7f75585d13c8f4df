//! Block position and the per-frame movement rule.

use super::bounds::Bounds;
use super::input::DirectionalInput;

/// Top-left corner of the block, in window pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Position {
    /// Creates a position from its coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Moves one frame according to the held directions, then clamps into `bounds`.
    ///
    /// Each axis moves by `speed` towards every held direction on it, so
    /// holding both directions of an axis leaves that axis where it was.
    /// Both axes are clamped every frame, whether or not they moved.
    ///
    /// # Arguments
    ///
    /// * `input` - Directions held this frame.
    /// * `speed` - Distance moved per held direction.
    /// * `bounds` - Region the result is clamped into.
    pub fn step(self, input: &impl DirectionalInput, speed: f32, bounds: &Bounds) -> Self {
        let moved = Self::new(
            self.x + input.horizontal() * speed,
            self.y + input.vertical() * speed,
        );
        bounds.clamp(moved)
    }
}
