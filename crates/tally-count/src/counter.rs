//! Atomic invocation counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts invocations of a single target.
///
/// Increments use relaxed ordering: the count establishes no ordering with
/// other memory operations and is only aggregated once the instrumented
/// code has stopped running.
#[derive(Debug, Default)]
pub struct CallCounter {
    hits: AtomicU64,
}

impl CallCounter {
    /// Create a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Record one invocation.
    pub fn record(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current invocation count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Reset the count to zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
