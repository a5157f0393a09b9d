use crate::model::state::{EditSession, TodoState};
use crate::model::task::{Filter, Task, TaskId};

/// A user intent the widget can act on.
///
/// Every action is total: ids that no longer exist and blank drafts are
/// accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft input's text
    SetDraft(String),
    /// Append the draft as a new task (ignored when blank)
    AddTask,
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    /// Put a row in edit mode, seeding the field with `text`
    BeginEdit { id: TaskId, text: String },
    /// Replace the in-progress edit text
    SetEditText(String),
    /// Write `text` to the task and leave edit mode
    ConfirmEdit { id: TaskId, text: String },
    CancelEdit,
    SetFilter(Filter),
}

impl Action {
    /// Short name for log lines (never includes task text)
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetDraft(_) => "set_draft",
            Action::AddTask => "add_task",
            Action::ToggleTask(_) => "toggle_task",
            Action::DeleteTask(_) => "delete_task",
            Action::BeginEdit { .. } => "begin_edit",
            Action::SetEditText(_) => "set_edit_text",
            Action::ConfirmEdit { .. } => "confirm_edit",
            Action::CancelEdit => "cancel_edit",
            Action::SetFilter(_) => "set_filter",
        }
    }
}

/// Compute the next state from the current one and an action
pub fn reduce(mut state: TodoState, action: Action) -> TodoState {
    match action {
        Action::SetDraft(text) => state.draft_text = text,
        Action::AddTask => add_task(&mut state),
        Action::ToggleTask(id) => toggle_task(&mut state, id),
        Action::DeleteTask(id) => delete_task(&mut state, id),
        Action::BeginEdit { id, text } => begin_edit(&mut state, id, text),
        Action::SetEditText(text) => set_edit_text(&mut state, text),
        Action::ConfirmEdit { id, text } => confirm_edit(&mut state, id, text),
        Action::CancelEdit => cancel_edit(&mut state),
        Action::SetFilter(filter) => state.filter = filter,
    }
    state
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn mint_id(state: &mut TodoState) -> TaskId {
    let id = TaskId(state.next_id);
    state.next_id += 1;
    id
}

/// Append the draft as a task and clear it. A blank draft is left as-is.
pub fn add_task(state: &mut TodoState) {
    if state.draft_text.trim().is_empty() {
        return;
    }
    let id = mint_id(state);
    let text = std::mem::take(&mut state.draft_text);
    state.tasks.push(Task::new(id, text));
}

pub fn toggle_task(state: &mut TodoState, id: TaskId) {
    if let Some(task) = state.find_mut(id) {
        task.completed = !task.completed;
    }
}

pub fn delete_task(state: &mut TodoState, id: TaskId) {
    state.tasks.retain(|t| t.id != id);
}

/// Start editing `id`. Any other unconfirmed edit is dropped.
pub fn begin_edit(state: &mut TodoState, id: TaskId, text: String) {
    if let Some(prev) = state.editing_id()
        && prev != id
    {
        tracing::debug!(abandoned = %prev, started = %id, "edit abandoned");
    }
    state.editing = Some(EditSession { id, text });
}

pub fn set_edit_text(state: &mut TodoState, text: String) {
    if let Some(session) = &mut state.editing {
        session.text = text;
    }
}

/// Retext the task (blank text allowed) and leave edit mode
pub fn confirm_edit(state: &mut TodoState, id: TaskId, text: String) {
    if let Some(task) = state.find_mut(id) {
        task.text = text;
    }
    state.editing = None;
}

pub fn cancel_edit(state: &mut TodoState) {
    state.editing = None;
}
