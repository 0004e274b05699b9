//! Counter registry and counting wrapper.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{CallCounter, ReportLine};

/// Registry of per-target invocation counters.
///
/// Counters are created on first use and shared afterwards, so a target
/// is armed at most once no matter how many call sites register it.
#[derive(Debug, Default)]
pub struct Registry {
    counters: RwLock<FxHashMap<String, Arc<CallCounter>>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the counter for `name`, creating it if necessary.
    ///
    /// The same `Arc` is returned for the same name across calls and
    /// threads.
    pub fn counter(&self, name: &str) -> Arc<CallCounter> {
        if let Some(counter) = self.counters.read().get(name) {
            return Arc::clone(counter);
        }
        let mut counters = self.counters.write();
        // Racing registrations resolve to whichever insert won.
        let counter = counters
            .entry(name.to_string())
            .or_insert_with(|| {
                trace!(target_name = name, "armed counter");
                Arc::new(CallCounter::new())
            });
        Arc::clone(counter)
    }

    /// Get the counter for `name` if it has been armed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<CallCounter>> {
        self.counters.read().get(name).map(Arc::clone)
    }

    /// Wrap a callable so each invocation bumps the counter for `name`.
    pub fn wrap<F>(&self, name: &str, inner: F) -> Counted<F> {
        Counted {
            counter: self.counter(name),
            inner,
        }
    }

    /// Number of armed counters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.read().len()
    }

    /// Whether no counter has been armed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.read().is_empty()
    }

    /// Report lines for every armed counter, sorted by target name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ReportLine> {
        let mut lines: Vec<ReportLine> = self
            .counters
            .read()
            .iter()
            .map(|(name, counter)| ReportLine::new(name.clone(), counter.count()))
            .collect();
        lines.sort_by(|a, b| a.target.cmp(&b.target));
        lines
    }
}

/// Counting wrapper around a callable.
///
/// `call` increments the counter, then delegates to the wrapped callable
/// with the arguments unmodified and returns its result. The original
/// callable stays reachable through [`Counted::inner`].
pub struct Counted<F> {
    counter: Arc<CallCounter>,
    inner: F,
}

impl<F> Counted<F> {
    /// Wrap `inner` so invocations count into `counter`.
    pub const fn new(counter: Arc<CallCounter>, inner: F) -> Self {
        Self { counter, inner }
    }

    /// Invoke the wrapped callable, counting this invocation.
    ///
    /// Multi-argument callables take their arguments as a tuple;
    /// zero-argument callables take `()`.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.counter.record();
        (self.inner)(args)
    }

    /// Counter this wrapper increments.
    #[must_use]
    pub fn counter(&self) -> &CallCounter {
        &self.counter
    }

    /// The original, uninstrumented callable.
    #[must_use]
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap, returning the original callable.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_counter_is_shared_per_name() {
        let registry = Registry::new();
        let a = registry.counter("Foo#bar");
        let b = registry.counter("Foo#bar");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unarmed_name() {
        let registry = Registry::new();
        assert!(registry.get("Foo#bar").is_none());
        registry.counter("Foo#bar");
        assert!(registry.get("Foo#bar").is_some());
    }

    #[test]
    fn test_wrap_counts_and_delegates() {
        let registry = Registry::new();
        let double = registry.wrap("Math.double", |n: u64| n * 2);
        assert_eq!(double.call(21), 42);
        assert_eq!(double.call(4), 8);
        assert_eq!(double.counter().count(), 2);
    }

    #[test]
    fn test_wrap_forwards_tuple_arguments() {
        let registry = Registry::new();
        let join = registry.wrap("Strings.join", |(a, b): (&str, &str)| format!("{a}{b}"));
        assert_eq!(join.call(("luft", "balloons")), "luftballoons");
        assert_eq!(join.counter().count(), 1);
    }

    #[test]
    fn test_late_wrap_attaches_to_armed_counter() {
        let registry = Registry::new();
        let armed = registry.counter("Borg#assimilate");
        let assimilate = registry.wrap("Borg#assimilate", |(): ()| ());
        assimilate.call(());
        assert_eq!(armed.count(), 1);
    }

    #[test]
    fn test_inner_does_not_count() {
        let registry = Registry::new();
        let noop = registry.wrap("Foo#bar", |(): ()| ());
        (noop.inner())(());
        assert_eq!(noop.counter().count(), 0);
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let registry = Registry::new();
        registry.counter("B#b").record();
        registry.counter("A#a");
        let lines = registry.snapshot();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].target, "A#a");
        assert_eq!(lines[0].count, 0);
        assert_eq!(lines[1].target, "B#b");
        assert_eq!(lines[1].count, 1);
    }

    #[test]
    fn test_concurrent_registration_yields_one_counter() {
        let registry = Arc::new(Registry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry.counter("Hive#mind").record();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.counter("Hive#mind").count(), 8);
    }
}
