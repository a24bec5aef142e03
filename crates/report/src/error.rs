//! Report error types.

use domain::DomainError;
use queries::QueryError;
use thiserror::Error;

/// Errors that can occur while configuring, building or rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An environment variable held a value that could not be used.
    #[error("Invalid configuration: {name}={value:?}: {reason}")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// The dataset could not be loaded.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A query failed for a reason other than missing data.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// The report could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
