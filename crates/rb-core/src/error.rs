//! # AppError
//!
//! Centralized error handling for the bulletin board.
//! Every failure a request can hit maps to exactly one variant here.

use thiserror::Error;

/// The primary error type for all rb-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Request body could not be decoded into the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Validation failure (e.g., empty title after sanitization)
    #[error("validation error: {0}")]
    Validation(String),

    /// Token bucket was empty
    #[error("too many requests")]
    RateLimitExceeded,

    /// Infrastructure failure (query, insert, constraint)
    #[error("storage error: {0}")]
    Storage(String),

    /// HTTP verb not supported on the resource
    #[error("method not allowed")]
    MethodNotAllowed,
}

/// A specialized Result type for bulletin-board logic.
pub type Result<T> = std::result::Result<T, AppError>;
