//! # trip-rag
//!
//! Local retrieval for the trip planner.
//!
//! ## Overview
//!
//! The crate loads a small JSON file of travel-guide records into memory and
//! ranks them against a trip request with a keyword-overlap scorer. Retrieved
//! snippets are compacted into bounded, single-line strings before they are
//! embedded in an LLM prompt.
//!
//! - [`compact`] / [`with_prefix`] — whitespace collapsing and word-boundary truncation
//! - [`load_guides`] / [`load_local_documents`] — fallible and soft-fail loaders
//! - [`LocalGuideRetriever`] — keyword fallback retriever implementing [`GuideRetriever`]
//! - [`guide_context_lines`] — renders results as prompt context
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trip_rag::{GuideRetriever, LocalGuideRetriever, guide_context_lines};
//!
//! let retriever = LocalGuideRetriever::from_path("data/local_guides.json");
//! let results = retriever.retrieve("Prague", "food, beer", 3);
//! for line in guide_context_lines(&results, 200) {
//!     println!("{line}");
//! }
//! ```

pub mod compact;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod keyword;
pub mod loader;
pub mod retriever;

pub use compact::{DEFAULT_COMPACT_LIMIT, compact, with_prefix, with_prefix_limit};
pub use config::{RetrievalConfig, RetrievalConfigBuilder};
pub use context::guide_context_lines;
pub use document::{Document, DocumentMetadata, GuideRecord, RetrievalResult};
pub use error::{RagError, Result};
pub use keyword::LocalGuideRetriever;
pub use loader::{load_guides, load_local_documents};
pub use retriever::GuideRetriever;
