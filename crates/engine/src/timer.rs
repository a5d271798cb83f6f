//! Cancellable repeating timer.
//!
//! The caller supplies `now` on every call, so the timer never reads the clock
//! itself and can be driven deterministically in tests.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    next_deadline: Instant,
    cancelled: bool,
}

impl RepeatingTimer {
    /// Start a timer whose first tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        // A zero interval would fire unboundedly on every poll.
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_deadline: now + interval,
            cancelled: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop the timer. No tick fires afterwards.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// How long the caller may sleep or block before the next tick is due.
    ///
    /// `None` once cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(self.next_deadline.saturating_duration_since(now))
    }

    /// Number of ticks that came due since the last poll.
    ///
    /// The deadline advances by whole intervals so the cadence does not drift
    /// when a poll arrives late.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_deadline {
            return 0;
        }
        let late = now.duration_since(self.next_deadline);
        let extra = (late.as_nanos() / self.interval.as_nanos()) as u32;
        let fired = extra.saturating_add(1);
        self.next_deadline += self.interval * fired;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn does_not_fire_before_interval() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(50 * MS, t0);
        assert_eq!(timer.poll(t0), 0);
        assert_eq!(timer.poll(t0 + 49 * MS), 0);
        assert_eq!(timer.time_until_next(t0 + 20 * MS), Some(30 * MS));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(50 * MS, t0);
        assert_eq!(timer.poll(t0 + 50 * MS), 1);
        assert_eq!(timer.poll(t0 + 60 * MS), 0);
        assert_eq!(timer.poll(t0 + 100 * MS), 1);
    }

    #[test]
    fn late_poll_reports_every_missed_tick() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(50 * MS, t0);
        assert_eq!(timer.poll(t0 + 175 * MS), 3);
        // Deadline stays on the 50ms grid.
        assert_eq!(timer.time_until_next(t0 + 175 * MS), Some(25 * MS));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(50 * MS, t0);
        timer.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.poll(t0 + 500 * MS), 0);
        assert_eq!(timer.time_until_next(t0), None);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let t0 = Instant::now();
        let timer = RepeatingTimer::new(Duration::ZERO, t0);
        assert_eq!(timer.interval(), MS);
    }
}
