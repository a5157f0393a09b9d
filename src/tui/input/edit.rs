use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Action;
use crate::tui::app::{App, Focus};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

/// What a key did to a single-line text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    /// Not a line-editing key
    Ignored,
    /// Caret moved, text untouched
    Moved,
    /// Text changed
    Changed,
}

/// Apply a line-editing key to `text` with the caret at byte offset `cursor`
pub fn edit_line(text: &mut String, cursor: &mut usize, key: KeyEvent) -> LineEdit {
    *cursor = (*cursor).min(text.len());
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('a') if ctrl => {
            *cursor = 0;
            LineEdit::Moved
        }
        KeyCode::Char('e') if ctrl => {
            *cursor = text.len();
            LineEdit::Moved
        }
        KeyCode::Char('u') if ctrl => {
            if *cursor == 0 {
                return LineEdit::Moved;
            }
            text.replace_range(..*cursor, "");
            *cursor = 0;
            LineEdit::Changed
        }
        KeyCode::Char('w') if ctrl => delete_word_back(text, cursor),
        KeyCode::Backspace if alt || ctrl => delete_word_back(text, cursor),
        KeyCode::Char(c) if !ctrl && !alt => {
            text.insert(*cursor, c);
            *cursor += c.len_utf8();
            LineEdit::Changed
        }
        KeyCode::Backspace => match prev_grapheme_boundary(text, *cursor) {
            Some(start) => {
                text.replace_range(start..*cursor, "");
                *cursor = start;
                LineEdit::Changed
            }
            None => LineEdit::Moved,
        },
        KeyCode::Delete => match next_grapheme_boundary(text, *cursor) {
            Some(end) => {
                text.replace_range(*cursor..end, "");
                LineEdit::Changed
            }
            None => LineEdit::Moved,
        },
        KeyCode::Left => {
            *cursor = prev_grapheme_boundary(text, *cursor).unwrap_or(0);
            LineEdit::Moved
        }
        KeyCode::Right => {
            *cursor = next_grapheme_boundary(text, *cursor).unwrap_or(text.len());
            LineEdit::Moved
        }
        KeyCode::Home => {
            *cursor = 0;
            LineEdit::Moved
        }
        KeyCode::End => {
            *cursor = text.len();
            LineEdit::Moved
        }
        _ => LineEdit::Ignored,
    }
}

fn delete_word_back(text: &mut String, cursor: &mut usize) -> LineEdit {
    let start = word_boundary_left(text, *cursor);
    if start == *cursor {
        return LineEdit::Moved;
    }
    text.replace_range(start..*cursor, "");
    *cursor = start;
    LineEdit::Changed
}

/// Keys while the "add new" input has focus
pub(super) fn handle_draft(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.dispatch(Action::AddTask) {
                app.draft_cursor = 0;
                // Cursor to the last visible row
                let last = app.state().visible_tasks().len().saturating_sub(1);
                app.cursor = last;
            }
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => app.set_focus(Focus::List),
        _ => {
            let mut draft = app.state().draft_text.clone();
            let mut cursor = app.draft_cursor;
            let result = edit_line(&mut draft, &mut cursor, key);
            app.draft_cursor = cursor;
            if result == LineEdit::Changed {
                app.dispatch(Action::SetDraft(draft));
            }
        }
    }
}

/// Keys while a row's text field has focus
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(session) = app.state().editing.clone() else {
        app.set_focus(Focus::List);
        return;
    };
    match key.code {
        KeyCode::Enter => {
            app.dispatch(Action::ConfirmEdit {
                id: session.id,
                text: session.text,
            });
        }
        KeyCode::Esc => {
            app.dispatch(Action::CancelEdit);
        }
        _ => {
            let mut buf = session.text;
            let mut cursor = app.edit_cursor;
            let result = edit_line(&mut buf, &mut cursor, key);
            app.edit_cursor = cursor;
            if result == LineEdit::Changed {
                app.dispatch(Action::SetEditText(buf));
            }
        }
    }
}
