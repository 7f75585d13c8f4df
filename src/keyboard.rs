//! Live keyboard input backed by macroquad's key state.

use macroquad::input::{KeyCode, is_key_down};

use crate::simulation::input::{Direction, DirectionalInput};

/// Reads the arrow keys from the window's current key state.
///
/// Queries go straight to macroquad, so this reflects whatever is held at
/// the moment of the call. Take a [`crate::simulation::input::HeldKeys`]
/// snapshot if a frame needs a stable view.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    /// Key bound to `direction`.
    pub fn key_for(direction: Direction) -> KeyCode {
        match direction {
            Direction::Left => KeyCode::Left,
            Direction::Right => KeyCode::Right,
            Direction::Up => KeyCode::Up,
            Direction::Down => KeyCode::Down,
        }
    }
}

impl DirectionalInput for KeyboardInput {
    fn is_held(&self, direction: Direction) -> bool {
        is_key_down(Self::key_for(direction))
    }
}
