//! Fixed-rate tick scheduling.
//!
//! The engine always advances by one fixed step per
//! [`Simulation::tick`](crate::Simulation::tick). [`FrameClock`] decides how
//! many of those steps a rendered frame owes, accumulating real time at a
//! nominal 60 Hz so the simulation speed does not depend on the display
//! refresh rate.
//!
//! # Example
//!
//! ```ignore
//! use chargefield::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In your render loop:
//! for _ in 0..clock.update() {
//!     sim.tick();
//! }
//! println!("Frame: {}  Ticks: {}  FPS: {:.1}", clock.frame(), clock.ticks(), clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Converts wall-clock frames into whole fixed ticks.
#[derive(Debug)]
pub struct FrameClock {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Real time not yet converted into ticks.
    accumulator: Duration,
    /// Duration of one tick.
    tick_interval: Duration,
    /// Most ticks a single frame may run before the backlog is dropped.
    max_catch_up: u32,
    /// Total frames since start.
    frame_count: u64,
    /// Total ticks handed out since start.
    tick_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Real time since the last FPS update.
    fps_elapsed: Duration,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Whether ticking is paused.
    paused: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Clock ticking at 60 Hz.
    pub fn new() -> Self {
        Self::with_rate(60.0)
    }

    /// Clock ticking at `hz` ticks per second.
    pub fn with_rate(hz: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: Duration::ZERO,
            tick_interval: Duration::from_secs_f64(1.0 / f64::from(hz.max(f32::EPSILON))),
            max_catch_up: 5,
            frame_count: 0,
            tick_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_elapsed: Duration::ZERO,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Limit how many ticks one frame may run.
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// Measure real time since the previous call and return the ticks due.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(dt)
    }

    /// Account for `dt` of real time and return the ticks due.
    ///
    /// While paused no time accumulates and zero is returned. A backlog
    /// larger than `max_catch_up` ticks is dropped rather than replayed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.frame_count += 1;

        self.fps_elapsed += dt;
        if self.fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / self.fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_elapsed = Duration::ZERO;
        }

        if self.paused {
            return 0;
        }

        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.tick_interval && due < self.max_catch_up {
            self.accumulator -= self.tick_interval;
            due += 1;
        }
        if due == self.max_catch_up && self.accumulator >= self.tick_interval {
            tracing::trace!(dropped = ?self.accumulator, "frame clock dropped backlog");
            self.accumulator = Duration::ZERO;
        }
        self.tick_count += u64::from(due);
        due
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Total ticks handed out since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Duration of one tick.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop handing out ticks.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume ticking. Time spent paused is not replayed.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_frame = Instant::now();
            self.accumulator = Duration::ZERO;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.ticks(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::with_rate(100.0);
        assert_eq!(clock.advance(ms(4)), 0);
        assert_eq!(clock.advance(ms(4)), 0);
        assert_eq!(clock.advance(ms(4)), 1);
        assert_eq!(clock.advance(ms(25)), 2);
        assert_eq!(clock.ticks(), 3);
        assert_eq!(clock.frame(), 4);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut clock = FrameClock::with_rate(100.0).with_max_catch_up(3);
        assert_eq!(clock.advance(Duration::from_secs(2)), 3);
        // The rest of the backlog is gone
        assert_eq!(clock.advance(ms(1)), 0);
    }

    #[test]
    fn test_pause_hands_out_nothing() {
        let mut clock = FrameClock::with_rate(100.0);
        clock.pause();
        assert_eq!(clock.advance(ms(100)), 0);
        clock.toggle_pause();
        assert!(!clock.is_paused());
        assert_eq!(clock.advance(ms(10)), 1);
    }

    #[test]
    fn test_fps_estimate() {
        let mut clock = FrameClock::new();
        for _ in 0..30 {
            clock.advance(ms(20));
        }
        assert!((clock.fps() - 50.0).abs() < 1.0);
    }
}
