//! Rendering retrieval results as prompt context.

use crate::compact::with_prefix_limit;
use crate::document::RetrievalResult;

/// Render one bounded, single-line snippet per result.
///
/// Each line is labelled `Guide`, or `Guide [tag, tag]` when the source
/// document carries interest tags, and its body is compacted to `limit`
/// characters.
pub fn guide_context_lines(results: &[RetrievalResult], limit: usize) -> Vec<String> {
    results
        .iter()
        .map(|result| {
            let tags = &result.metadata.interests;
            let label = if tags.is_empty() {
                "Guide".to_string()
            } else {
                format!("Guide [{}]", tags.join(", "))
            };
            with_prefix_limit(&label, &result.content, limit)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentMetadata;

    fn result(content: &str, interests: &[&str]) -> RetrievalResult {
        RetrievalResult {
            content: content.to_string(),
            metadata: DocumentMetadata {
                city: String::new(),
                interests: interests.iter().map(|s| s.to_string()).collect(),
            },
            score: 1.0,
        }
    }

    #[test]
    fn labels_with_tags() {
        let lines = guide_context_lines(
            &[result("Prague: Beer and food tour.", &["food", "beer"]), result("Oslo", &[])],
            200,
        );
        assert_eq!(lines, vec!["Guide [food, beer]: Prague: Beer and food tour.", "Guide: Oslo"]);
    }

    #[test]
    fn bounds_and_flattens_content() {
        let long = format!("Rome:\n{}", "ruins and pasta ".repeat(40));
        let lines = guide_context_lines(&[result(&long, &[])], 50);
        assert!(!lines[0].contains('\n'));
        assert!(lines[0].chars().count() <= "Guide: ".len() + 50);
    }
}
