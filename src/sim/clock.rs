//! Fixed-rate frame scheduler
//!
//! The display callback may fire at 30, 60, 144 Hz or jitter between them.
//! The scheduler turns those callbacks into at most one logical tick each,
//! gated on a fixed interval, so the game runs at the same speed everywhere.

use crate::consts::TICK_INTERVAL_MS;

/// Gates display callbacks down to the fixed logical tick rate
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    /// Tick interval in milliseconds
    interval_ms: f64,
    /// Timestamp of the last accepted tick, aligned to the interval grid
    last_time: Option<f64>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}

impl FrameScheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_time: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp of the last accepted tick (None before the first callback)
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    /// Feed a callback timestamp (ms).
    ///
    /// Returns the elapsed time since the last accepted tick when exactly one
    /// logical update should run, or `None` when this callback should only
    /// redraw. The first callback seeds the clock and never ticks.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        if !now_ms.is_finite() {
            return None;
        }

        let last = *self.last_time.get_or_insert(now_ms);
        let elapsed = now_ms - last;

        if elapsed < 0.0 {
            // Clock went backwards: resync and skip rather than step negative time
            log::debug!("Scheduler clock went backwards by {:.2}ms, resyncing", -elapsed);
            self.last_time = Some(now_ms);
            return None;
        }

        if elapsed > self.interval_ms {
            // Keep the remainder so late callbacks don't drift the grid
            self.last_time = Some(now_ms - (elapsed % self.interval_ms));
            Some(elapsed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_callback_only_seeds() {
        let mut clock = FrameScheduler::default();
        assert_eq!(clock.tick(1000.0), None);
        assert_eq!(clock.last_time(), Some(1000.0));
    }

    #[test]
    fn test_ticks_once_past_interval() {
        let mut clock = FrameScheduler::default();
        clock.tick(0.0);
        // High refresh display: 144 Hz callbacks shouldn't tick every time
        assert_eq!(clock.tick(6.9), None);
        assert_eq!(clock.tick(13.8), None);
        assert!(clock.tick(20.7).is_some());
    }

    #[test]
    fn test_exact_interval_does_not_tick() {
        let mut clock = FrameScheduler::new(10.0);
        clock.tick(0.0);
        assert_eq!(clock.tick(10.0), None);
        assert_eq!(clock.tick(10.5), Some(10.5));
    }

    #[test]
    fn test_remainder_is_kept_on_grid() {
        let mut clock = FrameScheduler::new(10.0);
        clock.tick(0.0);
        // A long stall still yields a single tick
        assert_eq!(clock.tick(35.0), Some(35.0));
        assert_eq!(clock.last_time(), Some(30.0));
    }

    #[test]
    fn test_backwards_clock_skips() {
        let mut clock = FrameScheduler::new(10.0);
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), None);
        assert_eq!(clock.last_time(), Some(50.0));
        assert!(clock.tick(61.0).is_some());
    }

    #[test]
    fn test_non_finite_timestamp_ignored() {
        let mut clock = FrameScheduler::new(10.0);
        assert_eq!(clock.tick(f64::NAN), None);
        assert_eq!(clock.last_time(), None);
    }

    proptest! {
        #[test]
        fn prop_ticks_never_outpace_interval(steps in prop::collection::vec(0.0f64..40.0, 1..200)) {
            let mut clock = FrameScheduler::new(1000.0 / 60.0);
            let mut now = 0.0;
            clock.tick(now);
            let mut ticks = 0u32;
            for step in &steps {
                now += step;
                if clock.tick(now).is_some() {
                    ticks += 1;
                }
            }
            // At most one tick per callback and never more than elapsed/interval
            prop_assert!(ticks as usize <= steps.len());
            prop_assert!(f64::from(ticks) <= now / clock.interval_ms() + 1e-9);
        }
    }
}
