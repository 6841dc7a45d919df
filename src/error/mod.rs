//! Error types for `relato`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - A single failure mode: format-token resolution. Everything past the
//!   selector is total — unknown roles and empty item lists are policy
//!   outcomes, never errors.

use thiserror::Error;

/// Primary error type for `relato` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Format token matched no recognized report format.
    ///
    /// Carries the offending token verbatim. Raised before any item
    /// processing happens, so a failed call produces no partial output.
    #[error("Unsupported report type: {token}")]
    UnsupportedFormat { token: String },
}

/// Result type using `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;
