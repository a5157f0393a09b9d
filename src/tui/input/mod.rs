mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use crate::ops::Action;

use edit::{handle_draft, handle_edit};
use navigate::handle_list;

pub use edit::{LineEdit, edit_line};

/// Handle a key event for the focused region
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.focus {
        Focus::Draft => handle_draft(app, key),
        Focus::List => handle_list(app, key),
        Focus::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event. Inserts into the focused text field;
/// newlines become spaces since task text is a single line.
pub fn handle_paste(app: &mut App, text: &str) {
    let clean = text.replace(['\r', '\n', '\t'], " ");
    if clean.is_empty() {
        return;
    }
    match app.focus {
        Focus::Draft => {
            let mut draft = app.state().draft_text.clone();
            let at = app.draft_cursor.min(draft.len());
            draft.insert_str(at, &clean);
            app.draft_cursor = at + clean.len();
            app.dispatch(Action::SetDraft(draft));
        }
        Focus::Edit => {
            let Some(session) = app.state().editing.as_ref() else {
                return;
            };
            let mut buf = session.text.clone();
            let at = app.edit_cursor.min(buf.len());
            buf.insert_str(at, &clean);
            app.edit_cursor = at + clean.len();
            app.dispatch(Action::SetEditText(buf));
        }
        Focus::List => {}
    }
}

/// Some terminals report Shift+letter as the lowercase char with SHIFT set
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
