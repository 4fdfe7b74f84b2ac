//! OpenAI client implementation.

use async_openai::{Client, config::OpenAIConfig as AsyncOpenAIConfig};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::config::OpenAIConfig;
use super::convert;
use crate::error::{ModelError, Result};
use crate::llm::{Llm, LlmRequest, LlmResponse};

/// OpenAI client for the standard OpenAI API and OpenAI-compatible APIs.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client<AsyncOpenAIConfig>,
    model: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ModelError::InvalidConfig("api_key must not be empty".to_string()));
        }
        if config.model.trim().is_empty() {
            return Err(ModelError::InvalidConfig("model must not be empty".to_string()));
        }

        let openai_config =
            AsyncOpenAIConfig::new().with_api_key(&config.api_key).with_api_base(config.api_base());

        Ok(Self { client: Client::with_config(openai_config), model: config.model })
    }

    /// Create a client for an OpenAI-compatible API.
    pub fn compatible(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        Self::new(OpenAIConfig::compatible(api_key, base_url, model))
    }
}

#[async_trait]
impl Llm for OpenAIClient {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(model = %self.model, messages = request.messages.len()), err)]
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        let openai_request = convert::build_request(&self.model, &request)?;
        let raw = self.client.chat().create(openai_request).await?;

        let response = convert::from_openai_response(raw)?;
        debug!(model = %response.model, chars = response.content.len(), "chat completion received");
        Ok(response)
    }
}
