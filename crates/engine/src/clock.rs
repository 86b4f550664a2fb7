//! Frame timing utilities

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// `floor(1000 / delta_ms)`.
///
/// A zero or negative interval saturates to `u32::MAX`.
pub fn fps_from_delta_ms(delta_ms: f64) -> u32 {
    if delta_ms <= 0.0 {
        return u32::MAX;
    }
    (1000.0 / delta_ms).floor() as u32
}

/// Measures the time between consecutive iterations of a loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Milliseconds since the previous lap (or since `start`).
    pub fn lap_ms(&mut self) -> f64 {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta.as_secs_f64() * 1000.0
    }
}

/// Shared, lock-free FPS value written by the render cadence.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter(Arc<AtomicU32>);

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, fps: u32) {
        self.0.store(fps, Ordering::Relaxed);
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Accumulates tick deltas into whole elapsed seconds.
#[derive(Debug, Clone, Default)]
pub struct SecondsCounter {
    pending_ms: f64,
    seconds: u64,
}

impl SecondsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tick. Returns the new total when at least one whole second
    /// completed during this tick.
    pub fn advance(&mut self, delta_ms: f64) -> Option<u64> {
        self.pending_ms += delta_ms;
        let before = self.seconds;
        while self.pending_ms >= 1000.0 {
            self.pending_ms -= 1000.0;
            self.seconds += 1;
        }
        (self.seconds != before).then_some(self.seconds)
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_floor_of_thousand_over_delta() {
        assert_eq!(fps_from_delta_ms(33.0), 30);
        assert_eq!(fps_from_delta_ms(16.0), 62);
        assert_eq!(fps_from_delta_ms(1000.0), 1);
        assert_eq!(fps_from_delta_ms(2000.0), 0);
        assert_eq!(fps_from_delta_ms(0.0), u32::MAX);
    }

    #[test]
    fn fps_counter_is_shared_between_clones() {
        let a = FpsCounter::new();
        let b = a.clone();
        a.publish(60);
        assert_eq!(b.get(), 60);
    }

    #[test]
    fn seconds_counter_reports_only_on_rollover() {
        let mut s = SecondsCounter::new();
        assert_eq!(s.advance(400.0), None);
        assert_eq!(s.advance(400.0), None);
        assert_eq!(s.advance(400.0), Some(1));
        assert_eq!(s.advance(2100.0), Some(3));
        assert_eq!(s.seconds(), 3);
    }

    #[test]
    fn lap_is_non_negative() {
        let mut clock = FrameClock::start();
        assert!(clock.lap_ms() >= 0.0);
        assert!(clock.lap_ms() >= 0.0);
    }
}
