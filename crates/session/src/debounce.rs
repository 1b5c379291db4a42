use std::time::{Duration, Instant};

/// Delays an action until input has been quiet for a fixed period.
///
/// Time is passed in explicitly so the caller's event loop decides what
/// "now" is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    last_trigger: Option<Instant>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    /// Records input at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.last_trigger = Some(now);
    }

    /// Returns `true` exactly once per quiet period that has fully elapsed.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_trigger {
            Some(last) if now.saturating_duration_since(last) >= self.delay => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Drops any pending trigger.
    pub fn clear(&mut self) {
        self.last_trigger = None;
    }
}
