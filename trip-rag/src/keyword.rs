//! Keyword-overlap retriever over a local guide file.
//!
//! Used when no embedding index is available. Both the query and each
//! document are split into lowercase alphanumeric tokens and scored by
//! whole-token overlap, weighted by where the token matched.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::document::{Document, RetrievalResult};
use crate::loader::load_local_documents;
use crate::retriever::GuideRetriever;

/// Weight of a keyword that names the document's city.
const CITY_WEIGHT: f32 = 3.0;
/// Weight of a keyword found in one of the document's interest tags.
const INTEREST_WEIGHT: f32 = 2.0;
/// Weight of a keyword found anywhere in the document content.
const CONTENT_WEIGHT: f32 = 1.0;

/// An immutable set of guide documents ranked by keyword overlap.
///
/// # Example
///
/// ```rust,ignore
/// use trip_rag::{GuideRetriever, LocalGuideRetriever};
///
/// let retriever = LocalGuideRetriever::from_path("data/local_guides.json");
/// let results = retriever.retrieve("Prague", "food", 2);
/// ```
#[derive(Debug, Default)]
pub struct LocalGuideRetriever {
    documents: Vec<IndexedDocument>,
}

#[derive(Debug)]
struct IndexedDocument {
    document: Document,
    city_tokens: HashSet<String>,
    interest_tokens: HashSet<String>,
    content_tokens: HashSet<String>,
}

impl IndexedDocument {
    fn new(document: Document) -> Self {
        let city_tokens = tokenize(&document.metadata.city);
        let interest_tokens =
            document.metadata.interests.iter().flat_map(|tag| tokenize(tag)).collect();
        let content_tokens = tokenize(&document.content);
        Self { document, city_tokens, interest_tokens, content_tokens }
    }

    fn score(&self, keywords: &HashSet<String>) -> f32 {
        keywords
            .iter()
            .map(|keyword| {
                let mut score = 0.0;
                if self.city_tokens.contains(keyword) {
                    score += CITY_WEIGHT;
                }
                if self.interest_tokens.contains(keyword) {
                    score += INTEREST_WEIGHT;
                }
                if self.content_tokens.contains(keyword) {
                    score += CONTENT_WEIGHT;
                }
                score
            })
            .sum()
    }
}

impl LocalGuideRetriever {
    /// Build a retriever from already-loaded documents.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents: documents.into_iter().map(IndexedDocument::new).collect() }
    }

    /// Load the guide file at `path`. A missing or malformed file produces
    /// an empty retriever rather than an error.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(load_local_documents(path))
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Iterate over the held documents in load order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().map(|indexed| &indexed.document)
    }
}

impl GuideRetriever for LocalGuideRetriever {
    fn name(&self) -> &str {
        "local_keyword"
    }

    fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn retrieve(&self, destination: &str, interests: &str, k: usize) -> Vec<RetrievalResult> {
        if k == 0 || self.documents.is_empty() {
            return Vec::new();
        }

        let mut keywords = tokenize(destination);
        keywords.extend(tokenize(interests));
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f32, &Document)> = self
            .documents
            .iter()
            .map(|indexed| (indexed.score(&keywords), &indexed.document))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // `sort_by` is stable, so ties keep load order.
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(k);

        debug!(
            destination,
            interests,
            keywords = keywords.len(),
            matches = scored.len(),
            "keyword retrieval"
        );

        scored
            .into_iter()
            .map(|(score, document)| RetrievalResult {
                content: document.content.clone(),
                metadata: document.metadata.clone(),
                score,
            })
            .collect()
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
