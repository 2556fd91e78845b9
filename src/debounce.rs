//! Quiet-period gate for legality cycles.
//!
//! Not tied to any timer: callers feed it `Instant`s from whatever clock or
//! event loop they run, and poll [`Debouncer::take`] to learn when a cycle
//! is due.

use std::time::{Duration, Instant};

use crate::config::DEBOUNCE_QUIET_PERIOD;

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    last_change: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            last_change: None,
        }
    }

    /// Record a deck edit or format change at `now`, restarting the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    /// True if a change is pending and the quiet period has elapsed.
    pub fn ready(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|at| now.saturating_duration_since(at) >= self.quiet_period)
    }

    /// Like [`ready`](Self::ready), but consumes the pending change so each
    /// burst of edits triggers at most one cycle.
    pub fn take(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last_change = None;
            true
        } else {
            false
        }
    }

    /// Time left until the pending change becomes ready, if any is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.last_change
            .map(|at| self.quiet_period.saturating_sub(now.saturating_duration_since(at)))
    }

    pub fn is_pending(&self) -> bool {
        self.last_change.is_some()
    }
}
