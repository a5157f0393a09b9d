use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode::{
    display_width, grapheme_at, next_grapheme_boundary, truncate_to_width,
};

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Pad `spans` with `style`d spaces up to `width` cells
pub(super) fn pad_spans(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Spans for a single-line text field with a block caret at byte offset
/// `cursor`, scrolled horizontally so the caret stays inside `width` cells.
pub(super) fn text_field_spans(
    text: &str,
    cursor: usize,
    width: usize,
    text_style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if width == 0 {
        return spans;
    }
    let cursor = cursor.min(text.len());

    // Drop leading graphemes until the caret cell fits
    let caret_width = display_width(grapheme_at(text, cursor)).max(1);
    let mut start = 0;
    while start < cursor && display_width(&text[start..cursor]) + caret_width > width {
        start = next_grapheme_boundary(text, start).unwrap_or(cursor);
    }

    let before = &text[start..cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    let at = grapheme_at(text, cursor);
    if at.is_empty() {
        spans.push(Span::styled(" ", cursor_style));
    } else {
        spans.push(Span::styled(at.to_string(), cursor_style));
    }
    let after = &text[cursor + at.len()..];
    let room = width.saturating_sub(spans_width(&spans));
    if !after.is_empty() && room > 0 {
        spans.push(Span::styled(truncate_to_width(after, room), text_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn caret_at_end_adds_block() {
        let spans = text_field_spans("milk", 4, 10, Style::default(), Style::default());
        assert_eq!(text_of(&spans), "milk ");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn caret_mid_text_highlights_char() {
        let spans = text_field_spans("milk", 1, 10, Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["m", "i", "lk"]);
    }

    #[test]
    fn long_text_scrolls_to_caret() {
        let spans = text_field_spans("abcdefghij", 10, 5, Style::default(), Style::default());
        assert_eq!(text_of(&spans), "ghij ");
    }

    #[test]
    fn text_after_caret_is_clipped() {
        let spans = text_field_spans("abcdefghij", 0, 5, Style::default(), Style::default());
        assert_eq!(text_of(&spans), "abcd\u{2026}");
        assert_eq!(spans_width(&spans), 5);
    }

    #[test]
    fn wide_caret_grapheme_stays_inside_width() {
        // caret on the third CJK char (byte offset 6)
        let spans = text_field_spans("日本語", 6, 5, Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["本", "語"]);
        assert!(spans_width(&spans) <= 5);
    }

    #[test]
    fn pad_spans_fills_width() {
        let mut spans = vec![Span::raw("ab")];
        pad_spans(&mut spans, 5, Style::default());
        assert_eq!(text_of(&spans), "ab   ");
        pad_spans(&mut spans, 3, Style::default());
        assert_eq!(spans_width(&spans), 5);
    }
}
