//! Data types for guide records, documents, and retrieval results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw travel-guide entry as it appears in the guide file.
///
/// Every field is optional. Use [`GuideRecord::from_value`] to extract a
/// record from loosely-typed JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideRecord {
    /// The city the guide is about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Free-text description of the city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Interest tags such as `food` or `history`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl GuideRecord {
    /// Extract a record from a JSON value, tolerating wrong types.
    ///
    /// Returns `None` if `value` is not an object. Non-string `city` or
    /// `description` fields are treated as absent, a non-array `interests`
    /// field is treated as absent, and non-string tags are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        let interests = object.get("interests").and_then(Value::as_array).map(|tags| {
            tags.iter().filter_map(Value::as_str).map(str::to_string).collect::<Vec<_>>()
        });

        Some(Self { city: text("city"), description: text("description"), interests })
    }

    /// Normalize the record into a [`Document`].
    ///
    /// Returns `None` when both city and description are empty after
    /// trimming. The content reads `"City: Description"` when both are
    /// present, otherwise whichever one is.
    pub fn into_document(self) -> Option<Document> {
        let city = self.city.as_deref().map(str::trim).unwrap_or_default();
        let description = self.description.as_deref().map(str::trim).unwrap_or_default();

        let content = match (city.is_empty(), description.is_empty()) {
            (true, true) => return None,
            (false, false) => format!("{city}: {description}"),
            (false, true) => city.to_string(),
            (true, false) => description.to_string(),
        };

        Some(Document {
            content,
            metadata: DocumentMetadata {
                city: city.to_string(),
                interests: self.interests.unwrap_or_default(),
            },
        })
    }
}

/// Metadata carried by every [`Document`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// The city name, possibly empty.
    pub city: String,
    /// Interest tags, possibly empty.
    pub interests: Vec<String>,
}

/// A normalized, immutable guide document used as the unit of retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Human-readable text used for display and matching.
    pub content: String,
    /// City and interest tags.
    pub metadata: DocumentMetadata,
}

/// A retrieved [`Document`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievalResult {
    /// The document content.
    pub content: String,
    /// Metadata copied from the source document.
    pub metadata: DocumentMetadata,
    /// Keyword-overlap score (higher is more relevant, always positive).
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn tolerates_wrong_field_types() {
        let record = GuideRecord::from_value(&json!({
            "city": 42,
            "description": "Canals.",
            "interests": "food",
            "rating": 5
        }))
        .unwrap();
        assert_eq!(record.city, None);
        assert_eq!(record.description.as_deref(), Some("Canals."));
        assert_eq!(record.interests, None);
    }

    #[test]
    fn drops_non_string_tags() {
        let record =
            GuideRecord::from_value(&json!({"city": "Oslo", "interests": ["fjords", 3, null]}))
                .unwrap();
        assert_eq!(record.interests, Some(vec!["fjords".to_string()]));
    }

    #[test]
    fn non_object_is_not_a_record() {
        assert!(GuideRecord::from_value(&json!("Paris")).is_none());
        assert!(GuideRecord::from_value(&json!(null)).is_none());
    }

    #[test]
    fn builds_city_and_description_content() {
        let doc = GuideRecord {
            city: Some(" Paris ".into()),
            description: Some("Eiffel Tower and croissants.".into()),
            interests: Some(vec!["sights".into()]),
        }
        .into_document()
        .unwrap();
        assert_eq!(doc.content, "Paris: Eiffel Tower and croissants.");
        assert_eq!(doc.metadata.city, "Paris");
        assert_eq!(doc.metadata.interests, vec!["sights".to_string()]);
    }

    #[test]
    fn single_field_content() {
        let only_city = GuideRecord { city: Some("Lyon".into()), ..Default::default() };
        assert_eq!(only_city.into_document().unwrap().content, "Lyon");

        let only_description =
            GuideRecord { description: Some("No city".into()), ..Default::default() };
        let doc = only_description.into_document().unwrap();
        assert_eq!(doc.content, "No city");
        assert_eq!(doc.metadata.city, "");
        assert!(doc.metadata.interests.is_empty());
    }

    #[test]
    fn blank_record_is_skipped() {
        let blank = GuideRecord {
            city: Some("  ".into()),
            description: Some(String::new()),
            interests: Some(vec!["food".into()]),
        };
        assert!(blank.into_document().is_none());
        assert!(GuideRecord::default().into_document().is_none());
    }

    #[test]
    fn metadata_serializes_as_mapping() {
        let value = serde_json::to_value(DocumentMetadata {
            city: "Prague".into(),
            interests: vec!["beer".into()],
        })
        .unwrap();
        assert_eq!(value, json!({"city": "Prague", "interests": ["beer"]}));
    }
}
