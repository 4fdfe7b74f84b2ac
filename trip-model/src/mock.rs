//! Deterministic model for tests and offline runs.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::llm::{Llm, LlmRequest, LlmResponse};

/// A model that always returns the same reply and remembers what it was asked.
#[derive(Debug)]
pub struct MockLlm {
    name: String,
    reply: String,
    fail: bool,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub const DEFAULT_REPLY: &'static str = "Test itinerary";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: Self::DEFAULT_REPLY.to_string(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }

    /// Make every call fail with [`ModelError::Model`].
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new("mock")
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse> {
        debug!(model = %self.name, messages = request.messages.len(), "mock generate");
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        if self.fail {
            return Err(ModelError::Model("mock model configured to fail".to_string()));
        }
        Ok(LlmResponse { content: self.reply.clone(), model: self.name.clone() })
    }
}
