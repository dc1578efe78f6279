//! Helpers for fitting text into Discord's message limits.

/// Maximum length of a message's content.
pub const MESSAGE_LIMIT: usize = 2000;

/// Maximum length of an embed field value.
pub const EMBED_FIELD_LIMIT: usize = 1024;

const ELLIPSIS: &str = "…";

/// Truncates `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Joins names with `", "`, or `"none"` when there are no names.
pub fn join_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_short_text_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncates_long_text_to_limit() {
        let text = "a".repeat(MESSAGE_LIMIT + 50);
        let out = truncate(&text, MESSAGE_LIMIT);

        assert_eq!(out.chars().count(), MESSAGE_LIMIT);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn joins_names() {
        assert_eq!(join_names(&[]), "none");
        assert_eq!(
            join_names(&["A".to_string(), "B".to_string()]),
            "A, B"
        );
    }
}
