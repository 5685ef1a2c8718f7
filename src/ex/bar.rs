//! Bar (`|`) escaping in command arguments
//!
//! `|` separates commands on a Vim command line, so a command that takes
//! `|` as part of its argument must see it written as `\|`. Commands are
//! never chained here; an unescaped bar is rejected instead.

/// How the bar rule is applied while tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    /// Reject unescaped `|` and unescape `\|`
    #[default]
    Check,
    /// Text was already checked and unescaped; pass it through
    Verbatim,
}

/// Whether `text` contains a `|` that is not written as `\|`
pub fn has_unescaped_bar(text: &str) -> bool {
    text.replace("\\|", "").contains('|')
}

/// Unescape `\|` to `|`, or `None` when an unescaped `|` is present
pub fn unescape(text: &str) -> Option<String> {
    if !text.contains('|') {
        return Some(text.to_string());
    }
    if has_unescaped_bar(text) {
        return None;
    }
    Some(text.replace("\\|", "|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(unescape("x y").as_deref(), Some("x y"));
    }

    #[test]
    fn test_escaped_bar_is_unescaped() {
        assert_eq!(unescape("x \\|").as_deref(), Some("x |"));
        assert_eq!(unescape("a\\|b\\|c").as_deref(), Some("a|b|c"));
    }

    #[test]
    fn test_unescaped_bar_is_rejected() {
        assert!(has_unescaped_bar("x|y"));
        assert_eq!(unescape("x|y"), None);
        assert_eq!(unescape("a\\|b|c"), None);
    }
}
