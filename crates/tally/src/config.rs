//! Runtime configuration.

use std::env;

use tally_target::TargetDescriptor;

use crate::{Error, Result};

/// Environment variable naming the instrumentation target.
pub const TARGET_ENV_VAR: &str = "COUNT_CALLS_TO";

/// Instrumentation configuration.
///
/// Both constructors parse eagerly, so no instrumentation can be
/// installed from an invalid target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    target: TargetDescriptor,
}

impl Config {
    /// Read the target from `COUNT_CALLS_TO`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTarget`] if the variable is unset and
    /// [`Error::InvalidTarget`] if its value fails to parse.
    pub fn from_env() -> Result<Self> {
        let raw = env::var(TARGET_ENV_VAR).map_err(|_| Error::MissingTarget)?;
        Self::from_target_str(&raw)
    }

    /// Parse a qualified target string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] if the string fails to parse.
    pub fn from_target_str(raw: &str) -> Result<Self> {
        Ok(Self {
            target: TargetDescriptor::parse(raw)?,
        })
    }

    /// The configured target.
    #[must_use]
    pub const fn target(&self) -> &TargetDescriptor {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use tally_target::TargetError;

    use super::*;

    #[test]
    fn test_valid_target() {
        let config = Config::from_target_str("Foo::Bar#baz").unwrap();
        assert_eq!(config.target().qualified_name(), "Foo::Bar#baz");
        assert_eq!(config.target().type_name(), "Bar");
    }

    #[test]
    fn test_invalid_target_fails_fast() {
        let err = Config::from_target_str("fooBar").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTarget(TargetError::AmbiguousOrMissingSeparator(0))
        ));
    }

    #[test]
    fn test_error_message_names_the_expected_form() {
        let err = Config::from_target_str("").unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Must supply target in the form 'Class#method' or 'Class.method'")
        );
    }
}
