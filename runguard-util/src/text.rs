//! String shaping helpers.
//!
//! Column-oriented console output needs the same few operations over and
//! over: surround a value, pad it into a fixed-width cell with ellipsis
//! truncation, normalize an affix. [`StrExt`] collects them as an
//! extension trait on `str`.
//!
//! All sizes are counted in `char`s, not bytes.

/// Extension methods for shaping display strings.
pub trait StrExt {
    /// Surround the text with `open` and `close`. Empty or whitespace-only
    /// text is returned unchanged; use [`bracket_always`](Self::bracket_always)
    /// to bracket it anyway.
    fn bracket(&self, open: &str, close: &str) -> String;

    /// Surround the text with `open` and `close`, even when it is empty.
    fn bracket_always(&self, open: &str, close: &str) -> String;

    /// Pad on the right with spaces up to `size` chars. Longer text is
    /// truncated and `ellipsis` appended; when `size` cannot fit the
    /// ellipsis plus one char, the text is plainly truncated to `size`.
    /// Whitespace-only text yields `size` spaces.
    fn pad_right_ellipsis(&self, size: usize, ellipsis: &str) -> String;

    /// [`pad_right_ellipsis`](Self::pad_right_ellipsis), padding on the left.
    fn pad_left_ellipsis(&self, size: usize, ellipsis: &str) -> String;

    /// Prepend `prefix` unless the text already starts with it.
    fn ensure_prefix(&self, prefix: &str) -> String;

    /// Append `suffix` unless the text already ends with it.
    fn ensure_suffix(&self, suffix: &str) -> String;

    /// Remove a leading `prefix` when present, otherwise return unchanged.
    fn trim_leading(&self, prefix: &str) -> &str;

    /// Remove a trailing `suffix` when present, otherwise return unchanged.
    fn trim_trailing(&self, suffix: &str) -> &str;

    /// Remove `affix` from both ends, each only when present.
    fn trim_surrounding(&self, affix: &str) -> &str;

    /// Remove a leading `open` and a trailing `close`, each only when present.
    fn trim_surrounding_pair(&self, open: &str, close: &str) -> &str;
}

impl StrExt for str {
    fn bracket(&self, open: &str, close: &str) -> String {
        if self.trim().is_empty() {
            self.to_string()
        } else {
            self.bracket_always(open, close)
        }
    }

    fn bracket_always(&self, open: &str, close: &str) -> String {
        format!("{open}{self}{close}")
    }

    fn pad_right_ellipsis(&self, size: usize, ellipsis: &str) -> String {
        pad_with_ellipsis(self, size, ellipsis, Side::Right)
    }

    fn pad_left_ellipsis(&self, size: usize, ellipsis: &str) -> String {
        pad_with_ellipsis(self, size, ellipsis, Side::Left)
    }

    fn ensure_prefix(&self, prefix: &str) -> String {
        if self.starts_with(prefix) {
            self.to_string()
        } else {
            format!("{prefix}{self}")
        }
    }

    fn ensure_suffix(&self, suffix: &str) -> String {
        if self.ends_with(suffix) {
            self.to_string()
        } else {
            format!("{self}{suffix}")
        }
    }

    fn trim_leading(&self, prefix: &str) -> &str {
        if prefix.is_empty() {
            self
        } else {
            self.strip_prefix(prefix).unwrap_or(self)
        }
    }

    fn trim_trailing(&self, suffix: &str) -> &str {
        if suffix.is_empty() {
            self
        } else {
            self.strip_suffix(suffix).unwrap_or(self)
        }
    }

    fn trim_surrounding(&self, affix: &str) -> &str {
        self.trim_surrounding_pair(affix, affix)
    }

    fn trim_surrounding_pair(&self, open: &str, close: &str) -> &str {
        self.trim_leading(open).trim_trailing(close)
    }
}

enum Side {
    Left,
    Right,
}

fn pad_with_ellipsis(text: &str, size: usize, ellipsis: &str, side: Side) -> String {
    if text.trim().is_empty() {
        return " ".repeat(size);
    }

    let len = text.chars().count();
    let ellipsis_len = ellipsis.chars().count();

    if size < ellipsis_len + 1 {
        text.chars().take(size).collect()
    } else if len > size {
        let kept: String = text.chars().take(size - ellipsis_len).collect();
        format!("{kept}{ellipsis}")
    } else {
        let padding = " ".repeat(size - len);
        match side {
            Side::Right => format!("{text}{padding}"),
            Side::Left => format!("{padding}{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_STRING: &str = "test-string";
    const PADDING: usize = 10;

    #[test]
    fn test_bracket_surrounds_text() {
        assert_eq!(TEST_STRING.bracket("(", ")"), "(test-string)");
    }

    #[test]
    fn test_bracket_leaves_empty_text_alone() {
        assert_eq!("".bracket("(", ")"), "");
        assert_eq!("   ".bracket("(", ")"), "   ");
    }

    #[test]
    fn test_bracket_with_empty_brackets_is_identity() {
        assert_eq!(TEST_STRING.bracket("", ""), TEST_STRING);
    }

    #[test]
    fn test_bracket_always_brackets_empty_text() {
        assert_eq!("".bracket_always("(", ")"), "()");
    }

    #[test]
    fn test_pad_right_pads_short_text() {
        assert_eq!(
            TEST_STRING.pad_right_ellipsis(PADDING + 20, "..."),
            format!("{TEST_STRING}{}", " ".repeat(PADDING + 20 - TEST_STRING.len()))
        );
    }

    #[test]
    fn test_pad_right_leaves_exact_fit_alone() {
        assert_eq!(
            TEST_STRING.pad_right_ellipsis(TEST_STRING.len(), "..."),
            TEST_STRING
        );
    }

    #[test]
    fn test_pad_right_truncates_with_ellipsis() {
        assert_eq!(TEST_STRING.pad_right_ellipsis(PADDING, "..."), "test-st...");
    }

    #[test]
    fn test_pad_right_with_custom_ellipsis() {
        assert_eq!(TEST_STRING.pad_right_ellipsis(PADDING, "****"), "test-s****");
    }

    #[test]
    fn test_pad_right_truncates_plainly_below_ellipsis_size() {
        assert_eq!(TEST_STRING.pad_right_ellipsis(2, "..."), "te");
    }

    #[test]
    fn test_pad_right_size_zero_yields_empty() {
        assert_eq!(TEST_STRING.pad_right_ellipsis(0, "..."), "");
    }

    #[test]
    fn test_pad_right_whitespace_only_yields_spaces() {
        assert_eq!("".pad_right_ellipsis(PADDING, "..."), " ".repeat(PADDING));
        assert_eq!("  ".pad_right_ellipsis(PADDING, "..."), " ".repeat(PADDING));
    }

    #[test]
    fn test_pad_left_pads_short_text() {
        assert_eq!(TEST_STRING.pad_left_ellipsis(13, "..."), "  test-string");
    }

    #[test]
    fn test_pad_left_truncates_with_ellipsis() {
        assert_eq!(TEST_STRING.pad_left_ellipsis(PADDING, "..."), "test-st...");
    }

    #[test]
    fn test_pad_counts_chars_not_bytes() {
        assert_eq!("héllo".pad_right_ellipsis(7, "..."), "héllo  ");
    }

    #[test]
    fn test_ensure_prefix_prepends_when_missing() {
        assert_eq!("path".ensure_prefix("/"), "/path");
        assert_eq!("/path".ensure_prefix("/"), "/path");
    }

    #[test]
    fn test_ensure_suffix_appends_when_missing() {
        assert_eq!("dir".ensure_suffix("/"), "dir/");
        assert_eq!("dir/".ensure_suffix("/"), "dir/");
    }

    #[test]
    fn test_trim_leading_removes_present_prefix() {
        assert_eq!("/path".trim_leading("/"), "path");
        assert_eq!("path".trim_leading("/"), "path");
    }

    #[test]
    fn test_trim_trailing_removes_present_suffix() {
        assert_eq!("dir/".trim_trailing("/"), "dir");
        assert_eq!("dir".trim_trailing("/"), "dir");
    }

    #[test]
    fn test_trim_with_empty_affix_is_identity() {
        assert_eq!("text".trim_leading(""), "text");
        assert_eq!("text".trim_trailing(""), "text");
    }

    #[test]
    fn test_trim_surrounding_removes_both_ends() {
        assert_eq!("\"quoted\"".trim_surrounding("\""), "quoted");
        assert_eq!("\"half".trim_surrounding("\""), "half");
    }

    #[test]
    fn test_trim_surrounding_pair_uses_distinct_affixes() {
        assert_eq!("(group)".trim_surrounding_pair("(", ")"), "group");
        assert_eq!("(open".trim_surrounding_pair("(", ")"), "open");
    }
}
