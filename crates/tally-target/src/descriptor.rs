//! Target descriptor parsing.

use std::fmt;
use std::str::FromStr;

use crate::{Result, TargetError};

/// Separator naming an instance method (`Type#method`).
pub const INSTANCE_SEPARATOR: char = '#';
/// Separator naming a static method (`Type.method`).
pub const STATIC_SEPARATOR: char = '.';
/// Delimiter between namespace segments (`Outer::Inner`).
pub const NAMESPACE_DELIMITER: &str = "::";

/// How the target method is attached to its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// Invoked on an instance of the type (`#` separator).
    Instance,
    /// Invoked on the type itself (`.` separator).
    Static,
}

impl MethodKind {
    /// Separator character that names this kind.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Instance => INSTANCE_SEPARATOR,
            Self::Static => STATIC_SEPARATOR,
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance => write!(f, "instance"),
            Self::Static => write!(f, "static"),
        }
    }
}

/// A parsed target descriptor.
///
/// Immutable once parsed; parsing is pure, so the same input always
/// yields a structurally equal descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetDescriptor {
    qualified_name: String,
    module_names: Vec<String>,
    type_name: String,
    method_name: String,
    kind: MethodKind,
}

impl TargetDescriptor {
    /// Parse a qualified target name.
    ///
    /// The input must contain exactly one `#` or `.` separator and start
    /// with an uppercase letter. No partial descriptor is produced on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns a [`TargetError`] describing the first violated rule.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(TargetError::EmptyTarget);
        }

        let separators = raw
            .chars()
            .filter(|&c| c == INSTANCE_SEPARATOR || c == STATIC_SEPARATOR)
            .count();
        if separators != 1 {
            return Err(TargetError::AmbiguousOrMissingSeparator(separators));
        }

        let first = raw.chars().next().ok_or(TargetError::EmptyTarget)?;
        if !first.is_uppercase() {
            return Err(TargetError::LowercaseStart);
        }

        // Exactly one separator is present, so split_once cannot fail.
        let (kind, (namespaced_type, method_name)) = match raw.split_once(INSTANCE_SEPARATOR) {
            Some(parts) => (MethodKind::Instance, parts),
            None => {
                let parts = raw
                    .split_once(STATIC_SEPARATOR)
                    .ok_or(TargetError::AmbiguousOrMissingSeparator(0))?;
                (MethodKind::Static, parts)
            }
        };

        let mut segments: Vec<String> = namespaced_type
            .split(NAMESPACE_DELIMITER)
            .map(String::from)
            .collect();
        // split always yields at least one segment
        let type_name = segments.pop().unwrap_or_default();

        Ok(Self {
            qualified_name: raw.to_string(),
            module_names: segments,
            type_name,
            method_name: method_name.to_string(),
            kind,
        })
    }

    /// The raw qualified name, e.g. `Foo::Bar#baz`.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Namespace segments preceding the type, in original order.
    #[must_use]
    pub fn module_names(&self) -> &[String] {
        &self.module_names
    }

    /// Final namespace segment.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name after the separator.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// How the method is attached to its type.
    #[must_use]
    pub const fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Whether the target is an instance method (`#` separator).
    #[must_use]
    pub const fn is_instance_method(&self) -> bool {
        matches!(self.kind, MethodKind::Instance)
    }
}

impl FromStr for TargetDescriptor {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name)
    }
}
