use super::task::{Filter, Task, TaskId};

/// The task currently being retexted, with its in-progress text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub text: String,
}

/// Everything the widget knows: the task list plus the transient UI fields.
///
/// Only [`crate::ops::reduce`] produces new values of this type once the
/// widget is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    pub filter: Filter,
    /// Content of the "add new" input
    pub draft_text: String,
    /// Set while a row is in edit mode
    pub editing: Option<EditSession>,
    /// Next identifier to hand out; never reused
    pub next_id: u64,
}

impl TodoState {
    /// Empty state with the given initial filter
    pub fn with_filter(filter: Filter) -> Self {
        TodoState {
            filter,
            ..Default::default()
        }
    }

    pub(crate) fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Tasks that pass the current filter, in list order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, self.filter)
    }

    /// Number of incomplete tasks across the whole list
    pub fn remaining_count(&self) -> usize {
        remaining_count(&self.tasks)
    }

    /// Id of the task in edit mode, if any
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|s| s.id)
    }

    /// The edit session, if it belongs to `id`
    pub fn session_for(&self, id: TaskId) -> Option<&EditSession> {
        self.editing.as_ref().filter(|s| s.id == id)
    }
}

/// Filtered projection of a task list. Never mutates the list.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Count of tasks not yet completed
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}
