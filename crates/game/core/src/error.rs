//! Common error infrastructure for forge-core.
//!
//! This module provides shared types and traits used across all error types in forge-core.
//! Domain-specific errors (e.g., `TableError`, `CharacterError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! The derivation engine performs no I/O, so every error here is a precondition
//! violation: a malformed table, an empty list, or an edit that would break a
//! record invariant. Errors are values so callers and tests can assert on them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: the requested edit or input is invalid and should be rejected
/// - **Internal**: a catalog or table is malformed; this is a data bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: toggling a third primary, level beyond the pre-rolled hit dice
    Validation,

    /// Unexpected data inconsistency.
    ///
    /// Examples: a range table with a gap, an empty gear list
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

    /// Returns true if this error indicates a data bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all forge-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Error codes are stable strings suitable for logs and JSON output
pub trait ForgeError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable error code for this error.
    fn error_code(&self) -> &'static str;

    /// Returns true if this error is a data bug.
    fn is_internal(&self) -> bool {
        self.severity().is_internal()
    }
}
