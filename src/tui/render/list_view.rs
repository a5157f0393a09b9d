use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

use super::helpers::{pad_spans, text_field_spans};

/// Row triggers while viewing: edit, delete
pub const VIEW_ACTIONS: &str = "[edit] [del]";
/// Row triggers while editing: confirm, cancel
pub const EDIT_ACTIONS: &str = "[ok] [esc]";

/// Render the task rows that pass the current filter
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let visible = state.visible_tasks();

    if visible.is_empty() {
        let empty = Paragraph::new(" No tasks")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let scroll = scroll_offset(app.cursor, height);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(row, task)| render_task_row(app, task, row == app.cursor, area.width as usize))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// First visible row such that `cursor` is on screen
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 || cursor < height {
        0
    } else {
        cursor + 1 - height
    }
}

/// One row: marker, checkbox, label or text field, row triggers
fn render_task_row<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let selected = is_cursor && app.focus != Focus::Draft;
    let row_bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let bg_style = Style::default().bg(row_bg);
    let session = app.state().session_for(task.id);
    let actions = if session.is_some() {
        EDIT_ACTIONS
    } else {
        VIEW_ACTIONS
    };

    let mut spans: Vec<Span> = Vec::new();

    // Column 0: cursor bar
    if selected {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(theme.selection_border).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", bg_style));
    }

    let check_color = if task.completed {
        theme.green
    } else {
        theme.text
    };
    spans.push(Span::styled(
        task.checkbox(),
        Style::default().fg(check_color).bg(row_bg),
    ));
    spans.push(Span::styled(" ", bg_style));

    // marker + checkbox + space, gap before triggers, trailing margin
    let label_width = width.saturating_sub(1 + 4 + 1 + actions.len() + 1);
    let label_end = spans.len();

    match session {
        Some(session) => {
            let text_style = Style::default().fg(theme.text_bright).bg(row_bg);
            let cursor_style = if app.focus == Focus::Edit {
                Style::default().fg(theme.background).bg(theme.text_bright)
            } else {
                text_style
            };
            spans.extend(text_field_spans(
                &session.text,
                app.edit_cursor,
                label_width,
                text_style,
                cursor_style,
            ));
        }
        None => {
            let label_style = if task.completed {
                Style::default()
                    .fg(theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if selected {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_bright).bg(row_bg)
            };
            spans.push(Span::styled(
                truncate_to_width(&task.text, label_width),
                label_style,
            ));
        }
    }

    let mut label_spans = spans.split_off(label_end);
    pad_spans(&mut label_spans, label_width, bg_style);
    spans.extend(label_spans);

    let action_style = if selected {
        Style::default().fg(theme.highlight).bg(row_bg)
    } else {
        Style::default().fg(theme.dim).bg(row_bg)
    };
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(actions, action_style));
    spans.push(Span::styled(" ", bg_style));

    Line::from(spans)
}
