//! ## hemhub-core::time
//! **Virtual clock & cancellable timer queue**
//!
//! Every delayed step in the session (toggle commits, probe results,
//! notification phases, sensor ticks) is a scheduled entry here, so tests
//! drive the whole system by advancing a counter.

pub mod scheduler;

pub use scheduler::{TimerId, TimerQueue};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const NS_PER_MS: u64 = 1_000_000;

/// A deterministic clock that advances in nanoseconds.
#[derive(Clone)]
pub struct VirtualClock {
    offset: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Creates a new virtual clock with the given starting time.
    pub fn new(start_ns: u64) -> Self {
        Self {
            offset: Arc::new(AtomicU64::new(start_ns)),
        }
    }

    /// Returns the current virtual time in nanoseconds.
    #[inline]
    pub fn now_ns(&self) -> u64 {
        self.offset.load(Ordering::Acquire)
    }

    /// Advances the clock by the given number of nanoseconds.
    #[inline]
    pub fn advance(&self, ns: u64) {
        self.offset.fetch_add(ns, Ordering::Release);
    }

    /// Moves the clock forward to `deadline_ns`. Never moves it backwards.
    #[inline]
    pub fn advance_to(&self, deadline_ns: u64) {
        self.offset.fetch_max(deadline_ns, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_seeded_value() {
        let clock = VirtualClock::new(100);
        assert_eq!(clock.now_ns(), 100);
    }

    #[test]
    fn clock_advances() {
        let clock = VirtualClock::new(0);
        clock.advance(500);
        assert_eq!(clock.now_ns(), 500);
        clock.advance(250);
        assert_eq!(clock.now_ns(), 750);
    }

    #[test]
    fn advance_to_never_rewinds() {
        let clock = VirtualClock::new(0);
        clock.advance_to(1_000);
        clock.advance_to(400);
        assert_eq!(clock.now_ns(), 1_000);
    }
}
