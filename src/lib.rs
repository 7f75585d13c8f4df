//! # Block Mover
//!
//! A single square that moves around a fixed-size window under arrow-key
//! control, drawn with macroquad at a capped frame rate.
//!
//! ## Core Modules
//!
//! - [`simulation::session`] - Per-run state passed to update and render
//! - [`simulation::position`] - The movement and clamping rule
//! - [`simulation::params`] - Window, block and timing parameters
//! - [`app`] - The frame loop driver

/// Platform-independent logic: everything the frame loop updates.
pub mod simulation {
    /// Rectangular bounds and clamping.
    pub mod bounds;
    /// Directions and the input capability the update consumes.
    pub mod input;
    /// Session parameters and their validation.
    pub mod params;
    /// Block position and the per-frame update rule.
    pub mod position;
    /// Per-run state owned by the frame loop.
    pub mod session;
}

/// Frame loop driver and window configuration.
pub mod app;
/// Rendering of a frame.
pub mod graphics;
/// Arrow-key input from the window.
pub mod keyboard;
/// Frame rate limiting.
pub mod pacing;
