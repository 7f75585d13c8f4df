//! Parameters for a block-mover session.
//!
//! Everything tunable about the demo lives here: window size, block size,
//! speed, frame rate and colors. The defaults are the classic 800x600 window
//! with a 50 pixel red block moving 5 pixels per frame at 60 Hz.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bounds::Bounds;
use super::position::Position;

/// Errors raised when a set of parameters cannot describe a valid session.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Block size is zero, negative or not a number.
    #[error("block size must be a positive finite number, got {0}")]
    InvalidBlockSize(f32),
    /// Window dimensions are not whole pixel counts a window can be created with.
    #[error("window size must be whole pixels between 1 and {max}, got {width}x{height}", max = i32::MAX)]
    InvalidWindowSize {
        /// Window width.
        width: f32,
        /// Window height.
        height: f32,
    },
    /// The block does not fit inside the window.
    #[error("block of size {size} does not fit in a {width}x{height} window")]
    BlockTooLarge {
        /// Requested block size.
        size: f32,
        /// Window width.
        width: f32,
        /// Window height.
        height: f32,
    },
    /// Speed is negative or not a number.
    #[error("speed must be a non-negative finite number, got {0}")]
    InvalidSpeed(f32),
    /// A frame rate of zero would never advance.
    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,
    /// The parameters document could not be parsed.
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation parameters that control the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Window width in pixels.
    pub window_width: f32,
    /// Window height in pixels.
    pub window_height: f32,
    /// Side length of the square block.
    pub block_size: f32,
    /// Distance moved per frame while a direction is held.
    pub speed: f32,
    /// Frame rate the loop is capped to.
    pub target_fps: u32,
    /// Background fill color (RGB).
    pub background_color: [u8; 3],
    /// Block fill color (RGB).
    pub block_color: [u8; 3],
}

impl Default for Params {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            block_size: 50.0,
            speed: 5.0,
            target_fps: 60,
            background_color: [255, 255, 255],
            block_color: [255, 0, 0],
        }
    }
}

impl Params {
    /// Checks that the parameters describe a usable session.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.block_size.is_finite() || self.block_size <= 0.0 {
            return Err(ParamsError::InvalidBlockSize(self.block_size));
        }
        if !is_window_dimension(self.window_width) || !is_window_dimension(self.window_height) {
            return Err(ParamsError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        let fits = self.block_size <= self.window_width && self.block_size <= self.window_height;
        if !fits {
            return Err(ParamsError::BlockTooLarge {
                size: self.block_size,
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ParamsError::InvalidSpeed(self.speed));
        }
        if self.target_fps == 0 {
            return Err(ParamsError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Parses parameters from a JSON document and validates them.
    ///
    /// Fields missing from the document keep their default values.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// The region the block's top-left corner may occupy.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.window_width - self.block_size,
            self.window_height - self.block_size,
        )
    }

    /// Where the block starts: the top-left corner sits at the window center.
    pub fn start_position(&self) -> Position {
        Position::new(self.window_width / 2.0, self.window_height / 2.0)
    }
}

// The window is created with integer sizes; anything else would leave the
// bounds out of step with the real window.
fn is_window_dimension(dim: f32) -> bool {
    dim.is_finite() && dim >= 1.0 && dim.fract() == 0.0 && f64::from(dim) <= f64::from(i32::MAX)
}
