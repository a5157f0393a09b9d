use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

use super::helpers::{pad_spans, text_field_spans};

pub const PROMPT: &str = " Add: ";
pub const ADD_TRIGGER: &str = "[Add]";
pub const PLACEHOLDER: &str = "Add a new todo";

/// Render the "add new" input: prompt, draft text field, add trigger
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let focused = app.focus == Focus::Draft;
    let draft = &app.state().draft_text;
    // prompt, field, " [Add] "
    let field_width = (area.width as usize).saturating_sub(PROMPT.len() + ADD_TRIGGER.len() + 2);

    let prompt_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let placeholder_style = Style::default().fg(theme.dim).bg(bg);
    let cursor_style = Style::default().fg(bg).bg(theme.text_bright);

    let mut field: Vec<Span> = if draft.is_empty() {
        let placeholder = truncate_to_width(PLACEHOLDER, field_width);
        if focused {
            // Caret sits on the placeholder's first cell
            let mut chars = placeholder.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            vec![
                Span::styled(first, cursor_style),
                Span::styled(chars.collect::<String>(), placeholder_style),
            ]
        } else {
            vec![Span::styled(placeholder, placeholder_style)]
        }
    } else if focused {
        text_field_spans(draft, app.draft_cursor, field_width, text_style, cursor_style)
    } else {
        vec![Span::styled(truncate_to_width(draft, field_width), text_style)]
    };
    pad_spans(&mut field, field_width, Style::default().bg(bg));

    let trigger_style = if focused {
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };

    let mut spans = vec![Span::styled(PROMPT, prompt_style)];
    spans.extend(field);
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(ADD_TRIGGER, trigger_style));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Action;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render(app: &App) -> String {
        render_to_string(40, 1, |frame, area| render_input_row(frame, app, area))
    }

    #[test]
    fn empty_draft_shows_placeholder() {
        let app = app_with_tasks(&[]);
        assert_eq!(render(&app), format!(" Add: {:<27} [Add]", PLACEHOLDER));
    }

    #[test]
    fn draft_text_replaces_placeholder() {
        let mut app = app_with_tasks(&[]);
        app.dispatch(Action::SetDraft("buy milk".into()));
        app.draft_cursor = 8;
        assert_eq!(render(&app), format!(" Add: {:<27} [Add]", "buy milk"));
    }

    #[test]
    fn long_draft_scrolls_when_focused() {
        let mut app = app_with_tasks(&[]);
        let text = "0123456789012345678901234567890123456789";
        app.dispatch(Action::SetDraft(text.into()));
        app.draft_cursor = text.len();
        // field is 40 - 13 = 27 cells: 26 chars then the caret
        let out = render(&app);
        assert_eq!(out, format!(" Add: {}  [Add]", &text[14..]));
    }

    #[test]
    fn unfocused_long_draft_is_truncated() {
        let mut app = app_with_tasks(&["x"]);
        let text = "0123456789012345678901234567890123456789";
        app.dispatch(Action::SetDraft(text.into()));
        assert_eq!(app.focus, Focus::List);
        let out = render(&app);
        assert_eq!(out, format!(" Add: {}\u{2026} [Add]", &text[..26]));
    }
}
