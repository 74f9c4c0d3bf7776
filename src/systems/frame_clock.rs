//! Frame pacing
//!
//! The terminal loop has no swap chain to block on, so it sleeps out the rest
//! of each frame interval here.

use std::time::{Duration, Instant};

/// Paces a loop to a fixed frame interval
pub struct FrameClock {
    interval: Duration,
    frame_start: Instant,
    frames: u64,
}

impl FrameClock {
    /// Create a clock with the given frame interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
        self.frames += 1;
    }

    /// Time left in the current frame as of `now`
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.frame_start))
    }

    /// Sleep until the current frame interval has elapsed
    ///
    /// Returns immediately when the frame overran.
    pub fn wait(&self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }

    /// Frames begun so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
