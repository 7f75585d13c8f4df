//! Directional input as seen by the position update.
//!
//! The update never talks to a keyboard directly. It asks a
//! [`DirectionalInput`] whether each direction is held, so the live
//! keyboard and the plain [`HeldKeys`] snapshot used in tests are
//! interchangeable.

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
    /// Towards smaller y.
    Up,
    /// Towards larger y.
    Down,
}

impl Direction {
    /// All directions, in update order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Anything that can report which directions are held this frame.
pub trait DirectionalInput {
    /// Returns `true` if `direction` is currently held.
    fn is_held(&self, direction: Direction) -> bool;

    /// Signed step along x: -1, 0 or 1.
    fn horizontal(&self) -> f32 {
        axis(self.is_held(Direction::Left), self.is_held(Direction::Right))
    }

    /// Signed step along y: -1, 0 or 1. Up is negative.
    fn vertical(&self) -> f32 {
        axis(self.is_held(Direction::Up), self.is_held(Direction::Down))
    }
}

// Opposite directions cancel out.
fn axis(negative: bool, positive: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}

/// A plain snapshot of held directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// Left is held.
    pub left: bool,
    /// Right is held.
    pub right: bool,
    /// Up is held.
    pub up: bool,
    /// Down is held.
    pub down: bool,
}

impl HeldKeys {
    /// A snapshot with nothing held.
    pub fn none() -> Self {
        Self::default()
    }

    /// A snapshot with exactly the given directions held.
    pub fn with(directions: &[Direction]) -> Self {
        let mut keys = Self::none();
        for direction in directions {
            keys.set(*direction, true);
        }
        keys
    }

    /// Marks `direction` as held or released.
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Captures any other input source into a snapshot.
    pub fn capture(input: &impl DirectionalInput) -> Self {
        let mut keys = Self::none();
        for direction in Direction::ALL {
            keys.set(direction, input.is_held(direction));
        }
        keys
    }
}

impl DirectionalInput for HeldKeys {
    fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}
