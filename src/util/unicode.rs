use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
        .or(Some(0))
}

/// The grapheme cluster starting at `byte_offset`, empty at the end.
pub fn grapheme_at(s: &str, byte_offset: usize) -> &str {
    if byte_offset >= s.len() {
        return "";
    }
    s[byte_offset..].graphemes(true).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── display width ──────────────────────────────────────────────

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }

    // ── grapheme boundaries ────────────────────────────────────────

    #[test]
    fn next_boundary_ascii() {
        assert_eq!(next_grapheme_boundary("hi", 0), Some(1));
        assert_eq!(next_grapheme_boundary("hi", 1), Some(2));
        assert_eq!(next_grapheme_boundary("hi", 2), None);
    }

    #[test]
    fn prev_boundary_ascii() {
        assert_eq!(prev_grapheme_boundary("hi", 2), Some(1));
        assert_eq!(prev_grapheme_boundary("hi", 1), Some(0));
        assert_eq!(prev_grapheme_boundary("hi", 0), None);
    }

    #[test]
    fn boundaries_keep_combining_marks_together() {
        let s = "cafe\u{0301}!"; // graphemes: c a f é !
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }

    #[test]
    fn grapheme_at_clusters() {
        assert_eq!(grapheme_at("a🎉b", 1), "🎉");
        assert_eq!(grapheme_at("abc", 3), "");
    }
}
