//! Retriever trait for ranking guide documents against a trip request.

use crate::document::RetrievalResult;

/// A read-only source of guide snippets for a destination.
///
/// Implementations are immutable after construction and shared across
/// request handlers, typically as `Arc<dyn GuideRetriever>`. Retrieval never
/// fails: an unmatched query yields an empty list.
pub trait GuideRetriever: Send + Sync {
    /// A short identifier for logs.
    fn name(&self) -> &str;

    /// Whether the retriever holds no documents.
    fn is_empty(&self) -> bool;

    /// Return up to `k` results for the destination and interests, sorted
    /// by descending score.
    fn retrieve(&self, destination: &str, interests: &str, k: usize) -> Vec<RetrievalResult>;
}
