//=========================================================================
// Tick Pacer
//=========================================================================
//
// Fixed-rate tick scheduling for the event loop.
//
// The platform asks `is_due(now)` before each frame and calls
// `advance(now)` after running a tick. Deadlines step by a fixed interval
// so the average rate matches the target; if the loop falls more than a
// whole interval behind, the backlog is dropped instead of replayed
// (one tick per frame, never a burst).
//
//=========================================================================

use std::time::{Duration, Instant};

use log::trace;

//=== TickPacer ===========================================================

#[derive(Debug, Clone, Copy)]
pub(crate) struct TickPacer {
    interval: Duration,
    next: Instant,
}

impl TickPacer {
    /// Creates a pacer whose first tick is due at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub(crate) fn new(tps: f64, start: Instant) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        Self {
            interval: Duration::from_secs_f64(1.0 / tps),
            next: start,
        }
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Deadline of the next tick.
    pub(crate) fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Schedules the tick after the one that just ran.
    pub(crate) fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            trace!(target: "platform", "Tick pacer behind by {:?}, resyncing", now - self.next);
            self.next = now + self.interval;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
