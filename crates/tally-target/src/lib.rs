//! Qualified target name parsing.
//!
//! A target names one method of one type, e.g. `Foo::Bar#baz` for an
//! instance method or `Foo::Bar.baz` for a static method.

mod descriptor;

pub use descriptor::*;

use thiserror::Error;

/// Target parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("target is empty")]
    EmptyTarget,
    #[error("expected exactly one '#' or '.' separator, found {0}")]
    AmbiguousOrMissingSeparator(usize),
    #[error("target must start with an uppercase letter")]
    LowercaseStart,
}

pub type Result<T> = std::result::Result<T, TargetError>;
