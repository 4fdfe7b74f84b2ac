//! Error types for model calls.

use thiserror::Error;

/// Errors that can occur when calling a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The OpenAI API call failed (transport, API error, or decoding)
    #[cfg(feature = "openai")]
    #[error("OpenAI API error: {source}")]
    OpenAI {
        #[from]
        source: async_openai::error::OpenAIError,
    },

    /// The provider returned no usable choice
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// Generic model failure
    #[error("Model error: {0}")]
    Model(String),
}

/// Result type alias for [`ModelError`]
pub type Result<T> = std::result::Result<T, ModelError>;
