//! Core error types for the valuation engine.
//!
//! Bad individual fields never produce an error (they are coerced to
//! defaults). Errors are reserved for payloads whose shape is unusable
//! and for arithmetic that leaves the representable decimal range.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the valuation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Payload shape problems that cannot be absorbed by coercion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{0}' must be a list")]
    NotAList(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field '{field}' is not a number: {value}")]
    InvalidNumber { field: String, value: String },
}

/// Arithmetic failures during valuation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}
