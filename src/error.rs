//! Error types for variable resolution.

use thiserror::Error;

use crate::numeric::{NumericKind, ParseFailure};

/// Why a variable did not resolve to a value.
///
/// Only [`EnvError::TypeMismatch`] is a programming error. The other two are
/// ordinary parse failures that the fallback chains absorb.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    /// The variable is unset or set to the empty string.
    #[error("environment variable {name} is not set")]
    Missing { name: String },

    /// The variable is set but does not parse as the requested kind.
    #[error("environment variable {name}={raw:?} is not a valid {kind}: {reason}")]
    Invalid {
        name: String,
        raw: String,
        kind: NumericKind,
        reason: ParseFailure,
    },

    /// The registered default was stored with a different numeric kind.
    #[error("default for {name} was registered as {found}, but read as {expected}")]
    TypeMismatch {
        name: String,
        expected: NumericKind,
        found: NumericKind,
    },
}
