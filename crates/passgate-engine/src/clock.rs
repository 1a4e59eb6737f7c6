//! Wall-clock access.

use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// A source of the current instant in epoch milliseconds.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now_ms(&self) -> i64;

    /// Name used in diagnostics.
    fn kind(&self) -> &'static str {
        "custom"
    }
}

/// The system wall clock.
#[derive(Clone, Copy, Default, Debug)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }

    fn kind(&self) -> &'static str {
        "system"
    }
}

/// A clock that only moves when told to.
#[derive(Default, Debug)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    /// Create a clock frozen at `now_ms`.
    pub fn new(now_ms: i64) -> Self {
        Self(AtomicI64::new(now_ms))
    }

    /// Jump to `now_ms`.
    pub fn set(&self, now_ms: i64) {
        self.0.store(now_ms, Ordering::SeqCst);
    }

    /// Move forward by `delta_ms`.
    pub fn advance(&self, delta_ms: i64) {
        self.0.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }

    fn kind(&self) -> &'static str {
        "manual"
    }
}
