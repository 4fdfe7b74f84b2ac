//! OpenAI client configuration.

use serde::{Deserialize, Serialize};

/// Default OpenAI API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Configuration for [`OpenAIClient`](super::OpenAIClient).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenAIConfig {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model name, e.g. `gpt-4o-mini`.
    pub model: String,
    /// API base URL; [`OPENAI_API_BASE`] when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl OpenAIConfig {
    /// Configuration for api.openai.com.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: model.into(), base_url: None }
    }

    /// Configuration for an OpenAI-compatible API at `base_url`.
    pub fn compatible(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self { api_key: api_key.into(), model: model.into(), base_url: Some(base_url.into()) }
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE).trim_end_matches('/')
    }
}
