//! Configuration for guide retrieval.

use serde::{Deserialize, Serialize};

use crate::compact::DEFAULT_COMPACT_LIMIT;
use crate::error::{RagError, Result};

/// Configuration parameters for guide retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievalConfig {
    /// Number of top results to retrieve per request.
    pub top_k: usize,
    /// Maximum length of each guide snippet placed into a prompt.
    pub context_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 3, context_limit: DEFAULT_COMPACT_LIMIT }
    }
}

impl RetrievalConfig {
    /// Create a new builder for constructing a [`RetrievalConfig`].
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RetrievalConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetrievalConfigBuilder {
    config: RetrievalConfig,
}

impl RetrievalConfigBuilder {
    /// Set the number of results to retrieve.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the maximum snippet length.
    pub fn context_limit(mut self, limit: usize) -> Self {
        self.config.context_limit = limit;
        self
    }

    /// Build the [`RetrievalConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Config`] if `top_k == 0` or `context_limit == 0`.
    pub fn build(self) -> Result<RetrievalConfig> {
        if self.config.top_k == 0 {
            return Err(RagError::Config("top_k must be greater than zero".to_string()));
        }
        if self.config.context_limit == 0 {
            return Err(RagError::Config("context_limit must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RetrievalConfig::builder().build().unwrap();
        assert_eq!(config, RetrievalConfig::default());
        assert_eq!(config.top_k, 3);
        assert_eq!(config.context_limit, 200);
    }

    #[test]
    fn rejects_zero_values() {
        assert!(matches!(RetrievalConfig::builder().top_k(0).build(), Err(RagError::Config(_))));
        assert!(matches!(
            RetrievalConfig::builder().context_limit(0).build(),
            Err(RagError::Config(_))
        ));
    }
}
