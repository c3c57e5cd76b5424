use std::time::{Duration, Instant};

/// A single re-armable deadline driving the game tick.
///
/// Re-arming always replaces the pending deadline, so there is never more
/// than one scheduled tick in flight.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        TickTimer {
            interval,
            deadline: None,
        }
    }

    pub fn arm(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.deadline = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when the deadline has passed; the next deadline is then one
    /// interval from `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
