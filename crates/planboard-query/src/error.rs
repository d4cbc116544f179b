//! Error types for the query crate.
//!
//! The engine itself never fails; these errors only come up while turning
//! external text (CLI flags, config files) into query descriptors.

use thiserror::Error;

/// Errors that can occur when building a query descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Page size must be a positive integer.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    /// Sort direction was not `asc` or `desc`.
    #[error("unknown sort direction '{0}' (expected 'asc' or 'desc')")]
    UnknownDirection(String),

    /// Field kind was not `text`, `number` or `date`.
    #[error("unknown field kind '{0}' (expected 'text', 'number' or 'date')")]
    UnknownFieldKind(String),

    /// A `field=value` filter expression without a field name or `=`.
    #[error("malformed filter '{0}' (expected field=value)")]
    MalformedFilter(String),
}

/// Result type for query descriptor construction.
pub type Result<T> = std::result::Result<T, QueryError>;
