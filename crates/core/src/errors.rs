//! Core error types for uPortfolio.
//!
//! The wizard reports invalid operations through [`Error`]. Failures of the
//! external generation call travel through the narrower [`GenerationError`]
//! channel so that callers handle one undifferentiated failure path.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for wizard and model operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid wizard transition: {0}")]
    InvalidTransition(String),

    #[error("A generation is already in progress")]
    GenerationInProgress,

    #[error("No analysis results are available")]
    NoResults,

    #[error("Portfolio index {index} is out of range ({len} portfolios)")]
    PortfolioOutOfRange { index: usize, len: usize },

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Validation errors for values entered through the wizard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("'{field}' must be a finite, non-negative amount (got {value})")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("'{field}' must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Risk score must be between 1 and 10 (got {0})")]
    RiskScoreOutOfRange(u8),

    #[error("Unsupported tax bracket: {0}%")]
    UnsupportedTaxBracket(u8),
}

/// Failure of a single generation round trip.
///
/// Every variant leads to the same user-facing treatment; the payload is the
/// diagnostic cause and is only meant for logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The external service answered without any text.
    #[error("The model returned no output")]
    EmptyResponse,

    /// The text could not be parsed into the expected response shape.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// The call itself failed (network, credentials, quota, HTTP status).
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl GenerationError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
