//! Error types and result type for the girf-scan crate.
//!
//! This module defines all error variants that can occur when navigating an
//! IRF container. It uses the `snafu` library for ergonomic error handling
//! with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use girf_scan::{Result, GirfError};
//!
//! fn locate_axis() -> Result<u32> {
//!     // Return an error
//!     Err(GirfError::not_found("axis unit with HDUCLAS2 = AXIS"))
//! }
//!
//! fn handle_error() {
//!     match locate_axis() {
//!         Ok(pos) => println!("Found at {}", pos),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`GirfError::Io`]: transport-level failures on the underlying container
//! - [`GirfError::OutOfRange`]: cursor moved outside 1..=unit_count
//! - [`GirfError::NotFound`]: a scan predicate matched nothing
//! - [`GirfError::MalformedMetadata`]: a keyword present but unparsable (strict mode)
//! - [`GirfError::InvalidParameter`]: invalid function parameters

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the girf-scan crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `GirfError` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GirfError {
    /// Transport-level I/O failure on the underlying container storage.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// A cursor move targeted a position outside the container.
    #[snafu(display("Position {position} out of range (container has {unit_count} units)"))]
    OutOfRange {
        position: u32,
        unit_count: u32,
        backtrace: Backtrace,
    },

    /// A scan predicate matched no unit. Recoverable; the caller decides the fallback.
    #[snafu(display("Not found: {query}"))]
    NotFound {
        query: String,
        backtrace: Backtrace,
    },

    /// A classification keyword was present but its value did not parse as
    /// the expected type. Only raised in strict parse mode.
    #[snafu(display("Malformed metadata: keyword {keyword} has unparsable value {value:?}"))]
    MalformedMetadata {
        keyword: String,
        value: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for GirfError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl GirfError {
    /// Creates a `NotFound` error describing the query that missed.
    ///
    /// # Examples
    ///
    /// ```
    /// use girf_scan::GirfError;
    ///
    /// let error = GirfError::not_found("data unit with ID 5");
    /// ```
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `OutOfRange` error for the given position.
    pub fn out_of_range(position: u32, unit_count: u32) -> Self {
        Self::OutOfRange {
            position,
            unit_count,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MalformedMetadata` error for the given keyword and raw value.
    pub fn malformed_metadata<S: Into<String>>(keyword: S, value: S) -> Self {
        Self::MalformedMetadata {
            keyword: keyword.into(),
            value: value.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidParameter` error with the given message.
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        if let GirfError::NotFound { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for girf-scan operations.
///
/// This is a convenience type alias that uses [`GirfError`] as the error type.
pub type Result<T> = std::result::Result<T, GirfError>;
