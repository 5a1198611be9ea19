//! Deferred Callbacks
//!
//! The core never sleeps. A "callback after N ms" is a deadline that the
//! event loop checks every frame via [`DeferredTimer::poll`].
//!
//! Scheduling while a deadline is pending replaces it, so a controller can
//! never end up with two competing timers racing to clear the same flag.

use std::time::{Duration, Instant};

/// A single cancellable, replaceable deadline
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeferredTimer {
    deadline: Option<Instant>,
}

impl DeferredTimer {
    /// Create an idle timer
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the timer to fire `delay` after `now`
    ///
    /// Any pending deadline is cancelled first. Returns `true` if a pending
    /// deadline was replaced.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        let replaced = self.cancel();
        self.deadline = Some(now + delay);
        replaced
    }

    /// Cancel the pending deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline (zero when overdue)
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Fire the timer if its deadline has passed
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
