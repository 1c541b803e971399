//! Text utilities
//!
//! All width calculations use unicode display width, not byte length.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to fit within max display width, adding ellipsis if needed.
///
/// Returns `Cow::Borrowed` if no truncation needed (zero allocation).
pub fn truncate_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // Need at least 4 columns for "X..." pattern
    if max_width < 4 {
        return Cow::Owned(s.chars().take(max_width).collect());
    }

    let target_width = max_width - 3;
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|c| {
            let char_width = c.width().unwrap_or(0);
            if width + char_width <= target_width {
                width += char_width;
                true
            } else {
                false
            }
        })
        .collect();

    Cow::Owned(format!("{}...", truncated.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_is_borrowed() {
        let out = truncate_ellipsis("hello", 10);
        assert!(matches!(out, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_ellipsis("hello world", 8), "hello...");
    }

    #[test]
    fn test_respects_wide_chars() {
        // Each CJK char is two columns wide
        let out = truncate_ellipsis("日本語のテキスト", 9);
        assert_eq!(out, "日本語...");
    }

    #[test]
    fn test_tiny_width() {
        assert_eq!(truncate_ellipsis("abcdef", 2), "ab");
    }
}
