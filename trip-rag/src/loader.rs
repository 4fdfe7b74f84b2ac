//! Loading guide documents from a JSON file.
//!
//! The file holds an array of objects with optional `city`, `description`
//! and `interests` fields. [`load_guides`] reports every failure;
//! [`load_local_documents`] is the soft-fail variant used at service startup,
//! where a missing or broken guide file must never stop the server.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::document::{Document, GuideRecord};
use crate::error::{RagError, Result};

/// Read and normalize the guide file at `path`.
///
/// Records that are not objects, or whose city and description are both
/// empty, are skipped silently.
///
/// # Errors
///
/// - [`RagError::Io`] if the file is missing or unreadable
/// - [`RagError::Parse`] if the file is not valid JSON
/// - [`RagError::InvalidFormat`] if the JSON root is not an array
pub fn load_guides(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let raw =
        fs::read_to_string(path).map_err(|source| RagError::Io { path: path.into(), source })?;
    let root: Value = serde_json::from_str(&raw)
        .map_err(|source| RagError::Parse { path: path.into(), source })?;

    let Value::Array(entries) = root else {
        return Err(RagError::InvalidFormat {
            path: path.into(),
            message: "expected a JSON array of guide records".to_string(),
        });
    };

    let total = entries.len();
    let documents: Vec<Document> = entries
        .iter()
        .filter_map(GuideRecord::from_value)
        .filter_map(GuideRecord::into_document)
        .collect();

    debug!(path = %path.display(), total, skipped = total - documents.len(), "parsed guide records");
    Ok(documents)
}

/// Load guide documents, returning an empty list on any failure.
///
/// The failure is logged at `warn` level; callers only ever observe
/// "no documents".
pub fn load_local_documents(path: impl AsRef<Path>) -> Vec<Document> {
    let path = path.as_ref();
    match load_guides(path) {
        Ok(documents) => {
            info!(path = %path.display(), count = documents.len(), "loaded local guides");
            documents
        }
        Err(e) => {
            warn!(error = %e, "local guides unavailable, continuing without them");
            Vec::new()
        }
    }
}
