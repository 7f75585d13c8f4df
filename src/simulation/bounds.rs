//! Rectangular bounds for the block's top-left corner.

use super::position::Position;

/// The closed region `[0, max_x] x [0, max_y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Largest allowed x coordinate.
    pub max_x: f32,
    /// Largest allowed y coordinate.
    pub max_y: f32,
}

impl Bounds {
    /// Creates bounds with the given upper limits. Negative limits collapse to zero.
    pub fn new(max_x: f32, max_y: f32) -> Self {
        Self {
            max_x: max_x.max(0.0),
            max_y: max_y.max(0.0),
        }
    }

    /// Clamps each axis of `pos` independently into the bounds.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.min(self.max_x).max(0.0), pos.y.min(self.max_y).max(0.0))
    }

    /// Returns `true` if `pos` lies inside the bounds, edges included.
    pub fn contains(&self, pos: Position) -> bool {
        (0.0..=self.max_x).contains(&pos.x) && (0.0..=self.max_y).contains(&pos.y)
    }
}
