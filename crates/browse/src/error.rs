//! Browse Error Types
//!
//! Browsing itself cannot fail: unknown identifiers and odd filter values
//! degrade gracefully. These errors only surface from the strict parsers
//! offered to callers that want to validate input up front.

use derive_more::{Display, Error};

/// A browse error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for browse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// The offending input.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
