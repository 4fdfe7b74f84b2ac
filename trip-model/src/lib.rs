//! # trip-model
//!
//! LLM integrations for the trip planner.
//!
//! ## Overview
//!
//! - [`Llm`] - the trait every model backend implements
//! - [`MockLlm`] - deterministic model for tests and offline runs
//! - [`OpenAIClient`] - OpenAI and OpenAI-compatible chat completions (feature `openai`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trip_model::openai::{OpenAIClient, OpenAIConfig};
//! use trip_model::{Llm, LlmRequest, Message};
//!
//! let model = OpenAIClient::new(OpenAIConfig::new(
//!     std::env::var("OPENAI_API_KEY")?,
//!     "gpt-4o-mini",
//! ))?;
//! let response = model.generate(LlmRequest::new(vec![Message::user("Plan 2 days in Prague")])).await?;
//! println!("{}", response.content);
//! ```

pub mod error;
pub mod llm;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;

pub use error::{ModelError, Result};
pub use llm::{Llm, LlmRequest, LlmResponse, Message, Role};
pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::{OpenAIClient, OpenAIConfig};
