//! Query error types.

use domain::{DomainError, InvariantViolation};
use thiserror::Error;

/// Errors that can occur while answering a query.
///
/// Filters, existence checks and groupings that match nothing are not
/// errors; they return empty results.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A reduction with no defined value for an empty input.
    #[error("No data: {reduction} of an empty sequence is undefined")]
    EmptyResult { reduction: &'static str },

    /// No product in the dataset carries this category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two elements mapped to the same key where keys must be unique.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// A year/month pair that is not a calendar month.
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    /// A derived entity would break an entity invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),

    /// An error from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
