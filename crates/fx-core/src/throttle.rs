use instant::Instant;
use std::time::Duration;

/// Accepts at most one event per `interval`.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` and opens a new window if `now` is at least `interval`
    /// after the last accepted event.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now >= prev && now - prev < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
