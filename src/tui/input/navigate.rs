use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::ops::Action;
use crate::tui::app::{App, Focus};

/// Keys while the task rows have focus
pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(i32::MAX),

        // Row actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Action::ToggleTask(id));
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => begin_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Action::DeleteTask(id));
            }
        }

        // Filter selectors
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Active),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),
        KeyCode::Char('f') => {
            let next = app.state().filter.cycle();
            set_filter(app, next);
        }

        // Back to the input row
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.set_focus(Focus::Draft),
        _ => {}
    }
}

fn begin_edit(app: &mut App) {
    let Some(task) = app.cursor_task() else {
        return;
    };
    let (id, text) = (task.id, task.text.clone());
    app.edit_cursor = text.len();
    app.dispatch(Action::BeginEdit { id, text });
    app.set_focus(Focus::Edit);
}

fn set_filter(app: &mut App, filter: Filter) {
    // Keep the same task under the cursor when it survives the new filter
    let current = app.cursor_task_id();
    app.dispatch(Action::SetFilter(filter));
    let pos = current.and_then(|id| app.state().visible_tasks().iter().position(|t| t.id == id));
    if let Some(pos) = pos {
        app.cursor = pos;
    }
}
