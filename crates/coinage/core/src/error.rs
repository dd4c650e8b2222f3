//! Common error infrastructure for coinage-core.
//!
//! Domain-specific errors (identifier parsing, definition invariants) are
//! defined in their respective modules; this module provides the shared
//! severity scheme used to decide how a failure is surfaced. Nothing in this
//! crate is fatal: the worst case for a bad record or a non-convertible
//! configuration is "no mutation occurs this pass".

/// Severity level of an error, used for categorization and handling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should be rejected without retry.
    ///
    /// Examples: non-positive unit value, empty cost list, malformed key
    Validation,

    /// Internal error - unexpected inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all coinage-core errors.
///
/// Provides a uniform interface for error classification across the crate's
/// error types. Use `#[derive(thiserror::Error)]` for the Display/Error impl.
pub trait CoinageError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for diagnostics categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
