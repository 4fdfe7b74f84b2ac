//! OpenAI provider.
//!
//! Talks to the chat completions endpoint of OpenAI or any compatible API
//! (OpenRouter, Ollama, vLLM, ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use trip_model::openai::{OpenAIClient, OpenAIConfig};
//!
//! // api.openai.com
//! let openai = OpenAIClient::new(OpenAIConfig::new("sk-...", "gpt-4o-mini"))?;
//!
//! // OpenAI-compatible server
//! let local = OpenAIClient::compatible("unused", "http://localhost:11434/v1", "llama3.2")?;
//! ```

mod client;
mod config;
mod convert;

pub use client::OpenAIClient;
pub use config::{OPENAI_API_BASE, OpenAIConfig};
