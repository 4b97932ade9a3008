//! Catalog Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The catalog file could not be read.
    #[display("could not read catalog file")]
    Io,
    /// The catalog document is not valid JSON, or a field has the wrong shape.
    #[display("malformed catalog document")]
    Parse,
    /// The records parsed, but do not form a consistent catalog (duplicate
    /// identifiers, dangling author or genre references).
    #[display("invalid catalog data: {_0}")]
    InvalidData(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            // The file might have been mid-write, or on a flaky mount.
            Self::Io => true,
            Self::Parse | Self::InvalidData(_) => false,
        }
    }
}
