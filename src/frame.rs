//! Frame driver: clock plus per-tick orchestration.
//!
//! The frame driver owns no domain state. Each tick it advances the clock
//! and hands the new elapsed time to the session, which rolls the camera
//! and steps the animator. The host loop then renders and requests the
//! next frame.
//!
//! # Example
//!
//! ```ignore
//! let mut driver = FrameDriver::new();
//!
//! // Once per display refresh:
//! let (elapsed, delta) = driver.tick(&mut session);
//! ```

use std::time::Instant;

use crate::session::Session;

/// Monotonic clock producing elapsed and delta time per frame.
///
/// An optional fixed delta decouples the clock from wall time for
/// deterministic stepping.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
        }
    }

    /// Advance the clock by one frame. Returns `(elapsed, delta)` seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        match self.fixed_delta {
            Some(delta) => {
                self.delta_secs = delta;
                self.elapsed_secs += delta;
            }
            None => {
                self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
                self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
            }
        }
        self.last_frame = now;
        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Time since the last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Use a fixed per-frame delta instead of wall time.
    /// Pass `None` to return to real timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Reset to the initial state, keeping the fixed-delta setting.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_frame = now;
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Couples a [`FrameClock`] to a [`Session`].
pub struct FrameDriver {
    clock: FrameClock,
}

impl FrameDriver {
    /// Create a driver with a real-time clock.
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
        }
    }

    /// Create a driver stepping a fixed delta per tick.
    pub fn with_fixed_delta(delta: f32) -> Self {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(delta));
        Self { clock }
    }

    /// The underlying clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Run one tick: advance the clock, then the session.
    /// Returns `(elapsed, delta)` seconds.
    pub fn tick(&mut self, session: &mut Session) -> (f32, f32) {
        let (elapsed, delta) = self.clock.update();
        session.advance(elapsed);
        (elapsed, delta)
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
