//! # Frame clock
//!
//! Paces the game loop: a frame never starts until at least [MIN_FRAME_TIME] has passed since the last one, and the delta handed to the game is capped at [MAX_DELTA] so a stall (a breakpoint, a dragged window) doesn't teleport everything.

/// Seconds; roughly 60 frames per second.
pub const MIN_FRAME_TIME: f64 = 0.016;
/// Seconds.
pub const MAX_DELTA: f32 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_tick: f64,
    min_frame_time: f64,
    max_delta: f32,
}

impl FrameClock {
    /// `now` is in seconds, e.g. macroquad's `get_time()`.
    pub fn new(now: f64) -> Self {
        Self {
            last_tick: now,
            min_frame_time: MIN_FRAME_TIME,
            max_delta: MAX_DELTA,
        }
    }

    /// Whether enough time has passed to start the next frame.
    pub fn ready(&self, now: f64) -> bool {
        now - self.last_tick >= self.min_frame_time
    }

    /// Starts a frame: returns the clamped delta in seconds since the previous tick.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = ((now - self.last_tick) as f32).max(0.0).min(self.max_delta);
        self.last_tick = now;
        dt
    }

    /// Spins until the next frame may start, then ticks.
    pub fn wait_and_tick(&mut self, mut now: impl FnMut() -> f64) -> f32 {
        let mut t = now();
        while !self.ready(t) {
            std::hint::spin_loop();
            t = now();
        }
        self.tick(t)
    }
}
