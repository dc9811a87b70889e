//! Wall clock, frame-rate throttle, and periodic timer

use std::time::Instant;

/// Measures wall time between host callbacks
pub struct GameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last tick in seconds
    pub delta_time: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock. Call once per host callback.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        // Clamp so a stalled window doesn't dump seconds of spawns at once
        self.delta_time = elapsed.min(0.25);
        self.total_time += self.delta_time;
    }
}

/// Gates frame execution to a target rate.
///
/// Time is fed in with `advance`; once at least one interval has built up a
/// frame is due, and the remainder past a whole interval carries over.
pub struct FrameThrottle {
    /// Minimum time between executed frames, in seconds
    pub interval: f64,
    elapsed: f64,
    frames: u64,
}

impl FrameThrottle {
    pub fn with_fps(fps: f64) -> Self {
        Self {
            interval: 1.0 / fps,
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Add `dt` seconds; returns true if a frame should run now
    pub fn advance(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed %= self.interval;
        self.frames += 1;
        true
    }

    /// Frames executed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// A repeating trigger driven by simulated time, cancelable and re-armable
pub struct IntervalTimer {
    /// Time between firings, in seconds
    pub period: f64,
    accumulator: f64,
    armed: bool,
}

impl IntervalTimer {
    /// Create a disarmed timer
    pub fn new(period: f64) -> Self {
        Self {
            period,
            accumulator: 0.0,
            armed: false,
        }
    }

    /// Start (or restart) firing from zero accumulated time
    pub fn arm(&mut self) {
        self.accumulator = 0.0;
        self.armed = true;
    }

    /// Stop firing until re-armed
    pub fn cancel(&mut self) {
        self.armed = false;
        self.accumulator = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Add `dt` seconds; returns how many periods elapsed (0 when disarmed)
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !self.armed || self.period <= 0.0 {
            return 0;
        }
        self.accumulator += dt;
        let fires = (self.accumulator / self.period).floor();
        self.accumulator -= fires * self.period;
        fires as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
    }

    #[test]
    fn test_throttle_skips_until_interval() {
        let mut throttle = FrameThrottle::with_fps(30.0);
        assert!((throttle.interval - 1.0 / 30.0).abs() < 1e-12);

        assert!(!throttle.advance(0.02));
        assert!(throttle.advance(0.02));
        assert_eq!(throttle.frames(), 1);
    }

    #[test]
    fn test_throttle_carries_remainder() {
        let mut throttle = FrameThrottle::with_fps(30.0);
        // 0.04 runs a frame and carries ~0.00667
        assert!(throttle.advance(0.04));
        // 0.03 + carry crosses the interval again
        assert!(throttle.advance(0.03));
        // a fresh 0.01 does not
        assert!(!throttle.advance(0.01));
    }

    #[test]
    fn test_throttle_long_stall_runs_one_frame() {
        let mut throttle = FrameThrottle::with_fps(30.0);
        assert!(throttle.advance(1.0));
        assert_eq!(throttle.frames(), 1);
        assert!(!throttle.advance(0.0));
    }

    #[test]
    fn test_interval_timer_disarmed_never_fires() {
        let mut timer = IntervalTimer::new(0.03);
        assert!(!timer.is_armed());
        assert_eq!(timer.advance(1.0), 0);
    }

    #[test]
    fn test_interval_timer_fires_per_period() {
        let mut timer = IntervalTimer::new(0.03);
        timer.arm();
        assert_eq!(timer.advance(0.02), 0);
        assert_eq!(timer.advance(0.02), 1);
        assert_eq!(timer.advance(0.095), 3);
    }

    #[test]
    fn test_interval_timer_cancel_and_rearm() {
        let mut timer = IntervalTimer::new(0.03);
        timer.arm();
        assert_eq!(timer.advance(0.02), 0);
        timer.cancel();
        assert_eq!(timer.advance(0.1), 0);

        // Re-arming starts from zero, so the earlier 0.02 is gone
        timer.arm();
        assert_eq!(timer.advance(0.02), 0);
        assert_eq!(timer.advance(0.015), 1);
    }
}
