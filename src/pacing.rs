//! Frame rate limiting for the main loop.

use std::time::{Duration, Instant};

/// Caps how often the frame loop runs.
///
/// The limiter marks the start of each frame; [`FrameLimiter::wait`] sleeps
/// out whatever is left of the frame interval before marking the next one.
/// It only sets an upper cap: presentation may still wait on vsync
/// afterwards, so a frame can take longer than the interval but never less.
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    /// Creates a limiter for `target_fps` frames per second.
    ///
    /// A rate of zero is treated as one frame per second.
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Length of one frame.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time still to wait after a frame that took `elapsed`. Zero if the frame overran.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }

    /// Sleeps until the current frame interval has passed, then starts the next frame.
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}
