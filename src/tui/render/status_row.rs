use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Key hints for the focused region
pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Draft => "Enter add  Tab list  Ctrl-C quit",
        Focus::List => "x toggle  e edit  d del  f filter  a add  q quit",
        Focus::Edit => "Enter confirm  Esc cancel",
    }
}

/// Render the hint row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let hints = format!(" {}", key_hints(app.focus));
    let line = Line::from(Span::styled(
        truncate_to_width(&hints, area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_hints_fit_default_width() {
        let app = app_with_tasks(&["a"]);
        let out = render_to_string(50, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(out, " x toggle  e edit  d del  f filter  a add  q quit");
    }

    #[test]
    fn narrow_row_truncates_hints() {
        let app = app_with_tasks(&["a"]);
        let out = render_to_string(20, 1, |frame, area| render_status_row(frame, &app, area));
        assert_eq!(out, " x toggle  e edit  \u{2026}");
    }
}
