use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_cells` terminal cells, ending with `…` when cut short
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(g);
    }
    result.push('\u{2026}');
    result
}

/// Byte offset of the grapheme after the one at `byte_offset`, or None at end
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let step = s[byte_offset..]
        .graphemes(true)
        .next()
        .map_or(s.len() - byte_offset, str::len);
    Some(byte_offset + step)
}

/// Byte offset of the grapheme before `byte_offset`, or None at start
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// The grapheme cluster starting at `byte_offset` ("" at end)
pub fn grapheme_at(s: &str, byte_offset: usize) -> &str {
    if byte_offset >= s.len() {
        return "";
    }
    s[byte_offset..].graphemes(true).next().unwrap_or("")
}

/// Start of the whitespace-delimited word left of `byte_offset`
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let is_space = |g: &str| g.chars().all(char::is_whitespace);
    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(byte_offset, |(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_of_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn truncate_never_splits_wide_char() {
        // 日 is 2 cells; budget of 2 leaves room for one cell plus the ellipsis
        assert_eq!(truncate_to_width("日本語", 3), "日\u{2026}");
        assert_eq!(truncate_to_width("日本語", 2), "\u{2026}");
    }

    #[test]
    fn grapheme_steps() {
        let s = "ae\u{301}b"; // a, e + combining acute, b
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 5), None);
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
        assert_eq!(grapheme_at(s, 1), "e\u{301}");
        assert_eq!(grapheme_at(s, 5), "");
    }

    #[test]
    fn word_left() {
        let s = "buy oat milk";
        assert_eq!(word_boundary_left(s, s.len()), 8);
        assert_eq!(word_boundary_left(s, 8), 4);
        assert_eq!(word_boundary_left(s, 7), 4);
        assert_eq!(word_boundary_left(s, 2), 0);
        assert_eq!(word_boundary_left(s, 0), 0);
        assert_eq!(word_boundary_left("milk   ", 7), 0);
    }
}
