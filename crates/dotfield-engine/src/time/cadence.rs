use std::time::{Duration, Instant};

/// One cadence tick.
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Seconds since the cadence started.
    pub elapsed: f32,
    /// Monotonic tick counter.
    pub index: u64,
}

/// Fixed-interval pacer for the motion source (typically ~10 Hz).
///
/// `tick()` sleeps until the next scheduled instant, so a loop built on it
/// runs at the configured cadence without drifting. After a stall longer
/// than one interval the schedule resynchronizes to "now" instead of
/// bursting to catch up; focal-point updates are only meaningful at the
/// latest reading anyway.
#[derive(Debug)]
pub struct Cadence {
    interval: Duration,
    start: Instant,
    next: Instant,
    index: u64,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "cadence interval must be non-zero");

        let now = Instant::now();
        Self {
            interval,
            start: now,
            next: now + interval,
            index: 0,
        }
    }

    /// Convenience constructor from a rate in Hz.
    pub fn from_hz(hz: f32) -> Self {
        debug_assert!(hz > 0.0);
        Self::new(Duration::from_secs_f32(1.0 / hz))
    }

    /// Blocks until the next scheduled instant and returns the tick.
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();

        if let Some(wait) = self.next.checked_duration_since(now) {
            std::thread::sleep(wait);
        } else if now.duration_since(self.next) > self.interval {
            // Stalled past a full interval: resynchronize, don't burst.
            self.next = now;
        }

        self.next += self.interval;

        let tick = Tick {
            elapsed: self.start.elapsed().as_secs_f32(),
            index: self.index,
        };
        self.index = self.index.wrapping_add(1);
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_indices_increase_monotonically() {
        let mut cadence = Cadence::new(Duration::from_micros(100));
        let a = cadence.tick();
        let b = cadence.tick();
        let c = cadence.tick();
        assert_eq!(a.index, 0);
        assert_eq!(b.index, 1);
        assert_eq!(c.index, 2);
    }

    #[test]
    fn elapsed_never_decreases() {
        let mut cadence = Cadence::from_hz(10_000.0);
        let mut last = 0.0;
        for _ in 0..5 {
            let t = cadence.tick();
            assert!(t.elapsed >= last);
            last = t.elapsed;
        }
    }
}
