//! Error types for tour search.

use thiserror::Error;

/// Errors rejected before the sampling loop starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McmcError {
    /// No points were supplied.
    #[error("empty input: at least one point is required")]
    EmptyInput,

    /// A run parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two points share the same identifier.
    #[error("duplicate point identifier: {0}")]
    DuplicatePoint(String),

    /// A point has a NaN or infinite coordinate.
    #[error("non-finite coordinate for point: {0}")]
    NonFiniteCoordinate(String),
}

/// Result type alias for tour search operations.
pub type Result<T> = std::result::Result<T, McmcError>;
