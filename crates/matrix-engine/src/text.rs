//! Text width, fitting and wrapping utilities.
//!
//! Widths are terminal display cells, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Take leading characters while they fit in `max_width` cells.
fn take_width(s: &str, max_width: usize) -> (String, usize) {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    (result, width)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Returns the truncated string with "..." appended if truncation occurred.
/// Widths too narrow for the ellipsis get a hard cut instead.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    if max_width <= 3 {
        return take_width(s, max_width).0;
    }

    let (mut result, _) = take_width(s, max_width - 3);
    result.push_str("...");
    result
}

/// Truncate or right-pad with spaces to exactly `width` cells.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut fitted = truncate_to_width(s, width);
    let used = visual_width(fitted.as_str());
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Wrap text to lines of at most `width` cells.
///
/// Empty input yields a single empty line so callers keep one row.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if s.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(s, width.max(1))
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap `[` and `]` with inner spaces around text when enabled.
pub fn bracketed(text: &str, brackets: bool) -> String {
    if brackets {
        format!("[ {text} ]")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_ascii() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_box_drawing() {
        assert_eq!(visual_width("┌──┐"), 4);
        assert_eq!(visual_width("╔═╗"), 3);
    }

    #[test]
    fn test_visual_width_wide_chars() {
        assert_eq!(visual_width("你好"), 4);
    }

    #[test]
    fn test_truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_very_short_is_hard_cut() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_does_not_split_wide_char() {
        let result = truncate_to_width("你好世界", 6);
        assert_eq!(result, "你...");
    }

    #[test]
    fn test_fit_pads_to_exact_width() {
        assert_eq!(fit_to_width("ok", 5), "ok   ");
        assert_eq!(visual_width(&fit_to_width("a much longer line", 7)), 7);
        assert_eq!(fit_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap() {
        let lines = wrap_to_width("wake up neo the matrix has you", 10);
        assert!(lines.iter().all(|l| visual_width(l) <= 10));
        assert_eq!(lines.join(" "), "wake up neo the matrix has you");
        assert_eq!(wrap_to_width("", 10), vec![String::new()]);
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed("ONLINE", true), "[ ONLINE ]");
        assert_eq!(bracketed("ONLINE", false), "ONLINE");
    }
}
