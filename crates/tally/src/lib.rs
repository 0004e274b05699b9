//! Tally - call-count instrumentation.
//!
//! Counts invocations of a single target callable named by a qualified
//! target string such as `Foo::Bar#baz` (instance method) or
//! `Foo::Bar.baz` (static method). The target is selected through the
//! `COUNT_CALLS_TO` environment variable; integrators wrap their
//! callables at explicit registration points.
//!
//! # Example
//!
//! ```
//! use tally::{Config, Session};
//!
//! let session = Session::new(Config::from_target_str("Greeter#greet")?);
//! let greet = session.instrument("Greeter#greet", |name: &str| format!("hello {name}"));
//! assert_eq!(greet.call("world"), "hello world");
//! assert_eq!(session.count(), 1);
//! # Ok::<(), tally::Error>(())
//! ```

// Re-export from sub-crates
pub use tally_count::{CallCounter, Counted, Registry, ReportLine};
pub use tally_target::{
    INSTANCE_SEPARATOR, MethodKind, NAMESPACE_DELIMITER, STATIC_SEPARATOR, TargetDescriptor,
    TargetError,
};

pub mod metrics;

mod config;
mod session;

pub use config::{Config, TARGET_ENV_VAR};
pub use session::Session;

use thiserror::Error;

/// Instrumentation errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Must supply target in the form 'Class#method' or 'Class.method': {} is not set",
        TARGET_ENV_VAR
    )]
    MissingTarget,
    #[error("Must supply target in the form 'Class#method' or 'Class.method': {0}")]
    InvalidTarget(#[from] TargetError),
}

pub type Result<T> = std::result::Result<T, Error>;
