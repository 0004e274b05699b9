//! Instrumentation session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tally_count::{CallCounter, Counted, Registry, ReportLine};
use tally_target::TargetDescriptor;
use tracing::debug;

use crate::{Config, Result, metrics};

/// A call-counting session.
///
/// Constructed at startup from a valid [`Config`], the session arms the
/// configured target and reports its tally exactly once at shutdown. A
/// session held for the lifetime of `main` prints the report when it is
/// dropped, with no further bookkeeping at the call sites.
pub struct Session {
    config: Config,
    registry: Arc<Registry>,
    armed: Arc<CallCounter>,
    reported: AtomicBool,
}

impl Session {
    /// Create a session for the target named by `COUNT_CALLS_TO`.
    ///
    /// # Errors
    ///
    /// Fails fast, before any instrumentation exists, if the variable is
    /// unset or its value is not a valid qualified target.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Create a session for an already-parsed configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let registry = Arc::new(Registry::new());
        let armed = registry.counter(config.target().qualified_name());
        debug!(
            target_name = config.target().qualified_name(),
            "session armed"
        );
        metrics::record_armed(config.target().qualified_name());
        Self {
            config,
            registry,
            armed,
            reported: AtomicBool::new(false),
        }
    }

    /// The armed target.
    #[must_use]
    pub const fn target(&self) -> &TargetDescriptor {
        self.config.target()
    }

    /// Registry of every counter created through this session.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Wrap a callable registered under `name`.
    ///
    /// Every registered callable counts into its own counter; the
    /// shutdown report covers only the armed target. Registration may
    /// happen at any time after startup, and a late registration of the
    /// armed name attaches to the counter created at arming time.
    pub fn instrument<F>(&self, name: &str, inner: F) -> Counted<F> {
        self.registry.wrap(name, inner)
    }

    /// Current tally of the armed target.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.armed.count()
    }

    /// Report line for the armed target.
    #[must_use]
    pub fn report_line(&self) -> ReportLine {
        ReportLine::new(self.target().qualified_name().to_string(), self.count())
    }

    /// Write the report line to standard output.
    ///
    /// Emitted at most once per session; later calls, including the one
    /// from `Drop`, are no-ops.
    pub fn report(&self) {
        if self.reported.swap(true, Ordering::SeqCst) {
            return;
        }
        let line = self.report_line();
        metrics::record_calls(&line.target, line.count);
        println!("{line}");
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.report();
    }
}
