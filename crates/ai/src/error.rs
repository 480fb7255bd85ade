//! Generation client error types.

use thiserror::Error;
use uportfolio_core::GenerationError;

/// Generation client errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// The credential variable named by the provider is unset or empty.
    #[error("Missing API key (expected in {0})")]
    MissingApiKey(String),

    /// Network failure or non-success HTTP status from the provider.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered without any text.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The text could not be parsed into an analysis response.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new malformed response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Error code for programmatic handling by hosts.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::EmptyResponse => "EMPTY_RESPONSE",
            AiError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<AiError> for GenerationError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::EmptyResponse => GenerationError::EmptyResponse,
            AiError::MalformedResponse(msg) => GenerationError::MalformedResponse(msg),
            other => GenerationError::Transport(format!("[{}] {}", other.code(), other)),
        }
    }
}
