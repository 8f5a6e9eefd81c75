//! Line wrapping for the text corpus.
//!
//! Raw text is split on `\n` and every original line becomes one or more
//! display lines of at most `limit` characters. An empty original line always
//! produces exactly one empty display line so paragraph breaks stay visible.

use std::borrow::Cow;
use textwrap::{Options, WrapAlgorithm};

use crate::constants::MIN_LINE_CHAR_LIMIT;
use crate::error::LayoutError;

/// Wraps text at a validated character limit
#[derive(Debug, Clone, Copy)]
pub struct LineWrapper {
    limit: usize,
    tab_width: usize,
}

impl LineWrapper {
    /// Create a wrapper, rejecting limits below the supported minimum
    pub fn new(limit: usize, tab_width: usize) -> Result<Self, LayoutError> {
        if limit < MIN_LINE_CHAR_LIMIT {
            return Err(LayoutError::LineCharLimitTooSmall {
                limit,
                minimum: MIN_LINE_CHAR_LIMIT,
            });
        }
        Ok(Self { limit, tab_width })
    }

    /// Wrap the whole text into display lines, preserving order
    pub fn wrap(&self, text: &str) -> Vec<String> {
        wrap_to_width(text, self.limit, self.tab_width)
    }
}

/// Wrap `text` at `width` characters. The width is not checked against the
/// minimum here.
fn wrap_to_width(text: &str, width: usize, tab_width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for original in text.split('\n') {
        let normalized = normalize_line(original, tab_width);
        wrap_line(&normalized, width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if line.trim().is_empty() {
        out.push(String::new());
        return;
    }

    let options = Options::new(width).wrap_algorithm(WrapAlgorithm::FirstFit);
    let start = out.len();
    for piece in textwrap::wrap(line, options) {
        split_at_char_limit(&piece, width, out);
    }
    // Every original line owns at least one display line
    if out.len() == start {
        out.push(String::new());
    }
}

/// The word wrapper counts one column per char but skips ANSI escape
/// sequences, which can leave a piece longer than `width` in chars. Those
/// pieces are split hard.
fn split_at_char_limit(piece: &str, width: usize, out: &mut Vec<String>) {
    if piece.chars().count() <= width {
        out.push(piece.to_string());
        return;
    }
    let chars: Vec<char> = piece.chars().collect();
    for chunk in chars.chunks(width) {
        out.push(chunk.iter().collect());
    }
}

/// Expand tabs to the next tab stop and turn the other whitespace control
/// characters into plain spaces.
fn normalize_line(line: &str, tab_width: usize) -> Cow<'_, str> {
    if !line.contains(['\t', '\r', '\x0b', '\x0c']) {
        return Cow::Borrowed(line);
    }

    let tab_width = tab_width.max(1);
    let mut result = String::with_capacity(line.len() + tab_width);
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            '\t' => {
                let spaces = tab_width - column % tab_width;
                result.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\r' | '\x0b' | '\x0c' => {
                result.push(' ');
                column += 1;
            }
            _ => {
                result.push(ch);
                column += 1;
            }
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper(limit: usize) -> LineWrapper {
        LineWrapper::new(limit, 8).unwrap()
    }

    #[test]
    fn test_wrap_to_width_breaks_long_word() {
        assert_eq!(wrap_to_width("aaaa", 2, 8), vec!["aa", "aa"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrapper(40).wrap(""), vec![""]);
    }

    #[test]
    fn test_limit_below_minimum_is_rejected() {
        assert_eq!(
            LineWrapper::new(39, 8).unwrap_err(),
            LayoutError::LineCharLimitTooSmall {
                limit: 39,
                minimum: 40
            }
        );
        assert!(LineWrapper::new(40, 8).is_ok());
    }

    #[test]
    fn test_blank_lines_are_preserved() {
        let lines = wrapper(40).wrap("first\n\n\nsecond\n");
        assert_eq!(lines, vec!["first", "", "", "second", ""]);
    }

    #[test]
    fn test_whitespace_only_line_is_one_empty_line() {
        let lines = wrapper(40).wrap("a\n   \t  \nb");
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_breaks_at_whitespace() {
        let text = "word ".repeat(20);
        let lines = wrapper(40).wrap(text.trim_end());
        // "word " * 8 is 40 chars, trailing space is dropped on wrap
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "word ".repeat(8).trim_end());
        assert!(lines.iter().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn test_no_line_exceeds_limit() {
        let text = format!(
            "{}\n{}\n{}",
            "x".repeat(500),
            "short words here and there ".repeat(30),
            "e\u{301}".repeat(100)
        );
        for limit in [40, 41, 77, 150] {
            for line in wrapper(limit).wrap(&text) {
                assert!(
                    line.chars().count() <= limit,
                    "line of {} chars exceeds {limit}",
                    line.chars().count()
                );
            }
        }
    }

    #[test]
    fn test_wide_chars_count_as_one_char() {
        let lines = wrapper(40).wrap(&"漢".repeat(60));
        let lengths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert_eq!(lengths, vec![40, 20]);
    }

    #[test]
    fn test_escape_sequences_still_respect_limit() {
        let text = "\x1b[31m".repeat(30) + &"a".repeat(30);
        for line in wrapper(40).wrap(&text) {
            assert!(line.chars().count() <= 40, "{line:?}");
        }
    }

    #[test]
    fn test_long_word_is_split_at_limit() {
        let lines = wrapper(40).wrap(&"a".repeat(100));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 40);
        assert_eq!(lines[1].len(), 40);
        assert_eq!(lines[2].len(), 20);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let text = "fn main() {\n\tprintln!(\"hello\");\n}\n\n".repeat(50);
        let wrapper = wrapper(60);
        assert_eq!(wrapper.wrap(&text), wrapper.wrap(&text));
    }

    #[test]
    fn test_lines_never_merge_across_originals() {
        let lines = wrapper(40).wrap("a\nb\nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        assert_eq!(normalize_line("\tx", 8), "        x");
        assert_eq!(normalize_line("ab\tx", 4), "ab  x");
        assert_eq!(normalize_line("a\r", 4), "a ");
        assert!(matches!(normalize_line("plain", 8), Cow::Borrowed(_)));
    }

    #[test]
    fn test_crlf_input_keeps_content() {
        let lines = wrapper(40).wrap("one\r\ntwo\r\n");
        assert_eq!(lines, vec!["one", "two", ""]);
    }
}
