//! Injectable clock for default base times.
//!
//! The evaluator never reads the wall clock directly; it takes a [`Clock`]
//! so tests can supply deterministic base times.

use chrono::Utc;

use crate::models::Timestamp;

/// A source of "now" for evaluations that omit a base time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// The production clock: current UTC wall time with an explicit offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::Offset(Utc::now().fixed_offset())
    }
}

/// A clock pinned to a single instant, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
