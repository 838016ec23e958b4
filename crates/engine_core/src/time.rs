//! Simulation time for the game loop.
//!
//! The clock only moves when the loop advances it, so a run driven with the
//! same sequence of deltas always produces the same timestamps.

/// Tracks elapsed simulation time.
#[derive(Debug, Clone, Default)]
pub struct Time {
    /// Duration of the last frame in seconds.
    delta: f32,
    /// Total elapsed simulation time in seconds.
    elapsed: f64,
    /// Frame count since start.
    frame_count: u64,
}

impl Time {
    /// Create a clock at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one frame of `dt` seconds. Negative deltas count as zero.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.delta = dt;
        self.elapsed += dt as f64;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds, as applied by the last `advance`.
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
