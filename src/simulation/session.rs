//! The running session: all per-run state in one place.
//!
//! A [`Session`] is created once at startup and handed explicitly to the
//! update and render steps of the frame loop.

use super::bounds::Bounds;
use super::input::DirectionalInput;
use super::params::{Params, ParamsError};
use super::position::Position;

/// State owned by one run of the demo.
#[derive(Debug, Clone)]
pub struct Session {
    params: Params,
    bounds: Bounds,
    position: Position,
    frames: u64,
}

impl Session {
    /// Creates a session with the block at its starting position.
    pub fn new(params: Params) -> Result<Self, ParamsError> {
        params.validate()?;
        let bounds = params.bounds();
        let position = bounds.clamp(params.start_position());
        Ok(Self {
            params,
            bounds,
            position,
            frames: 0,
        })
    }

    /// Applies one frame of input and returns the new position.
    pub fn update(&mut self, input: &impl DirectionalInput) -> Position {
        let next = self.position.step(input, self.params.speed, &self.bounds);
        if next != self.position {
            log::trace!(
                "frame {}: block moved to ({}, {})",
                self.frames,
                next.x,
                next.y
            );
        }
        self.position = next;
        self.frames += 1;
        next
    }

    /// Current block position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Bounds the block is confined to.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Parameters the session was created with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of updates applied so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
