pub mod footer;
mod helpers;
pub mod input_row;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Main render function: a pure projection of `app` onto the frame
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let hint_rows = if app.show_key_hints { 1 } else { 0 };

    // Layout: title | input | rule | tasks | rule | footer | hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(hint_rows),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    render_rule(frame, app, chunks[2]);
    list_view::render_list_view(frame, app, chunks[3]);
    render_rule(frame, app, chunks[4]);
    footer::render_footer(frame, app, chunks[5]);
    if app.show_key_hints {
        status_row::render_status_row(frame, app, chunks[6]);
    }
}

/// Centered heading
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let title = truncate_to_width(&app.title, width);
    let pad = (width - display_width(&title)) / 2;
    let line = Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(app.theme.background)),
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Horizontal rule across the whole row
fn render_rule(frame: &mut Frame, app: &App, area: Rect) {
    let rule = Paragraph::new("\u{2500}".repeat(area.width as usize))
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(rule, area);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::ops::Action;
    use crate::tui::app::Focus;
    use pretty_assertions::assert_eq;

    fn screen(app: &App) -> Vec<String> {
        render_to_string(50, 12, |frame, _area| render(frame, app))
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_tasks(&["buy milk", "walk dog"]);
        let id = app.state().tasks[1].id;
        app.dispatch(Action::ToggleTask(id));
        let lines = screen(&app);

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], format!("{}Todo App", " ".repeat(21)));
        assert!(lines[1].starts_with(" Add: Add a new todo"));
        assert!(lines[1].ends_with("[Add]"));
        assert_eq!(lines[2], "\u{2500}".repeat(50));
        assert!(lines[3].starts_with("\u{258E}[ ] buy milk"));
        assert!(lines[4].starts_with(" [x] walk dog"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[9], "\u{2500}".repeat(50));
        assert!(lines[10].starts_with(" 1 items left"));
        assert!(lines[10].ends_with("[All]  Active   Completed"));
        assert_eq!(lines[11], " x toggle  e edit  d del  f filter  a add  q quit");
    }

    #[test]
    fn hints_follow_focus_and_can_be_hidden() {
        let mut app = app_with_tasks(&["a"]);
        app.focus = Focus::Draft;
        assert_eq!(
            screen(&app)[11],
            format!(" {}", status_row::key_hints(Focus::Draft))
        );

        app.show_key_hints = false;
        let lines = screen(&app);
        // Footer moves to the last row
        assert!(lines[11].starts_with(" 1 items left"));
    }

    #[test]
    fn configured_title() {
        let mut app = app_with_tasks(&[]);
        app.title = "Groceries".into();
        assert_eq!(screen(&app)[0], format!("{}Groceries", " ".repeat(20)));
    }

    #[test]
    fn same_state_renders_identically() {
        let mut app = app_with_tasks(&["a", "b", "c"]);
        let id = app.state().tasks[2].id;
        app.dispatch(Action::BeginEdit {
            id,
            text: "c".into(),
        });
        let first = render_to_string(50, 12, |frame, _| render(frame, &app));
        let second = render_to_string(50, 12, |frame, _| render(frame, &app));
        assert_eq!(first, second);
    }
}
