//! Metrics collection using metrics-rs.
//!
//! Records arming and final tallies through the `metrics` facade so any
//! installed recorder can observe them.

use metrics::{Unit, counter, describe_counter};

/// Initialize metric descriptions.
///
/// Call this once at startup to register metric descriptions.
pub fn init() {
    describe_counter!(
        "tally_targets_armed_total",
        Unit::Count,
        "Targets armed over the process lifetime"
    );
    describe_counter!(
        "tally_calls_total",
        Unit::Count,
        "Final invocation tally per reported target"
    );
}

/// Record that a target was armed.
pub(crate) fn record_armed(target: &str) {
    let labels = [("target", target.to_string())];
    counter!("tally_targets_armed_total", &labels).increment(1);
}

/// Record the final tally for a reported target.
pub(crate) fn record_calls(target: &str, calls: u64) {
    let labels = [("target", target.to_string())];
    counter!("tally_calls_total", &labels).absolute(calls);
}
