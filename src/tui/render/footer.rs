use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

use super::helpers::spans_width;

/// Remaining count text, e.g. "3 items left"
pub fn remaining_text(count: usize) -> String {
    format!("{} items left", count)
}

/// Render the footer: remaining count on the left, filter selectors on the right
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let state = app.state();
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {}", remaining_text(state.remaining_count())),
        Style::default().fg(theme.text).bg(bg),
    )];

    let mut selectors: Vec<Span> = Vec::new();
    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            selectors.push(Span::styled(" ", Style::default().bg(bg)));
        }
        if *filter == state.filter {
            selectors.push(Span::styled(
                format!("[{}]", filter.label()),
                Style::default()
                    .fg(theme.highlight)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            selectors.push(Span::styled(
                format!(" {} ", filter.label()),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }
    selectors.push(Span::styled(" ", Style::default().bg(bg)));

    let used = spans_width(&spans) + spans_width(&selectors);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    spans.extend(selectors);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
