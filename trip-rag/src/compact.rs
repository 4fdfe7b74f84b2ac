//! Prompt-safe text compaction.
//!
//! Free text coming from guide files or user requests is collapsed to a
//! single line and bounded in length before it is placed into an LLM prompt.
//! Lengths are counted in `char`s.

/// Default maximum length applied by [`with_prefix`].
pub const DEFAULT_COMPACT_LIMIT: usize = 200;

const TRAILING_PUNCTUATION: [char; 5] = [',', '.', ';', '-', ' '];

/// Collapse whitespace and truncate `text` to at most `limit` characters.
///
/// Runs of whitespace (and control characters) become a single space and the
/// ends are trimmed. Text that already fits is returned as-is. Longer text is
/// cut at the last word boundary at or before `limit`, falling back to a hard
/// cut only when the first word alone exceeds the limit, and trailing
/// `, . ; -` and spaces are stripped from the truncated result.
///
/// # Example
///
/// ```rust
/// use trip_rag::compact;
///
/// let out = compact("one two three four five six seven eight nine ten", 20);
/// assert_eq!(out, "one two three four");
/// ```
pub fn compact(text: &str, limit: usize) -> String {
    let collapsed = collapse_whitespace(text);
    if collapsed.chars().count() <= limit {
        return collapsed;
    }

    // Byte offset of the first char past the limit. Always in range here
    // because the collapsed text is longer than `limit` chars.
    let cut = collapsed.char_indices().nth(limit).map_or(collapsed.len(), |(idx, _)| idx);
    let head = &collapsed[..cut];

    let bounded = if collapsed[cut..].starts_with(' ') {
        head
    } else {
        match head.rfind(' ') {
            Some(space) => &head[..space],
            None => head,
        }
    };

    bounded.trim_end_matches(TRAILING_PUNCTUATION).to_string()
}

/// Label a compacted body: `"<prefix>: <body>"`, or just the body when the
/// prefix is empty. The prefix is printed as given. The body is bounded by
/// [`DEFAULT_COMPACT_LIMIT`].
pub fn with_prefix(prefix: &str, body: &str) -> String {
    with_prefix_limit(prefix, body, DEFAULT_COMPACT_LIMIT)
}

/// Like [`with_prefix`] with an explicit body limit.
pub fn with_prefix_limit(prefix: &str, body: &str, limit: usize) -> String {
    let summary = compact(body, limit);
    if prefix.is_empty() { summary } else { format!("{prefix}: {summary}") }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(|c: char| c.is_whitespace() || c.is_control()) {
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_returns_empty() {
        assert_eq!(compact("", 200), "");
        assert_eq!(compact("   \n\t ", 200), "");
    }

    #[test]
    fn short_text_unchanged() {
        assert_eq!(compact("hello world", 200), "hello world");
        let out = compact(&"a ".repeat(50), 200);
        assert_eq!(out.matches('a').count(), 50);
        assert!(out.len() <= 200);
    }

    #[test]
    fn collapses_whitespace_and_control_chars() {
        assert_eq!(compact("  hello   world  ", 200), "hello world");
        assert_eq!(compact("line one\nline\ttwo\u{7}end", 200), "line one line two end");
    }

    #[test]
    fn truncates_at_word_boundary() {
        let out = compact("one two three four five six seven eight nine ten", 20);
        assert_eq!(out, "one two three four");
    }

    #[test]
    fn keeps_word_ending_exactly_at_limit() {
        // "one two three" is 13 chars and the next char is a space.
        assert_eq!(compact("one two three four", 13), "one two three");
    }

    #[test]
    fn strips_trailing_punctuation_when_truncating() {
        let out = compact("hello, world. extra words here", 15);
        assert_eq!(out, "hello, world");
        assert_eq!(out.trim_end_matches(TRAILING_PUNCTUATION), out);
    }

    #[test]
    fn hard_cut_when_first_word_exceeds_limit() {
        assert_eq!(compact("supercalifragilistic rest", 5), "super");
    }

    #[test]
    fn zero_limit_yields_empty() {
        assert_eq!(compact("anything at all", 0), "");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let out = compact("Kraków Łódź Gdańsk Wrocław", 12);
        assert_eq!(out, "Kraków Łódź");
        assert!(out.chars().count() <= 12);
    }

    #[test]
    fn with_prefix_adds_label() {
        let out = with_prefix("Kyoto essentials", "sunny and warm");
        assert_eq!(out, "Kyoto essentials: sunny and warm");
    }

    #[test]
    fn with_prefix_empty_prefix_returns_compacted_body() {
        assert_eq!(with_prefix("", "  some   summary "), "some summary");
    }

    #[test]
    fn with_prefix_keeps_prefix_verbatim() {
        assert_eq!(with_prefix(" Tips", "body text"), " Tips: body text");
        assert_eq!(with_prefix("Tips ", "body text"), "Tips : body text");
        assert!(with_prefix("  ", "body").starts_with("  :"));
    }

    #[test]
    fn with_prefix_respects_default_limit() {
        let out = with_prefix("Prefix", &"word ".repeat(100));
        assert!(out.starts_with("Prefix: "));
        assert!(out.chars().count() <= DEFAULT_COMPACT_LIMIT + "Prefix: ".len());
    }
}
