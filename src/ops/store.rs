use crate::model::state::TodoState;

use super::task_ops::{Action, reduce};

type Listener = Box<dyn FnMut(&TodoState, u64)>;

/// Holds the current [`TodoState`] and routes every change through
/// [`reduce`]. Listeners are told about each state that differs from the
/// previous one.
pub struct Store {
    state: TodoState,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new(state: TodoState) -> Self {
        Store {
            state,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Bumped once per dispatch that changed the state
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a callback run after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&TodoState, u64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an action. Returns true if the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let before = self.state.clone();
        self.state = reduce(std::mem::take(&mut self.state), action);
        let changed = self.state != before;
        tracing::debug!(
            action = name,
            changed,
            tasks = self.state.tasks.len(),
            remaining = self.state.remaining_count(),
            "dispatch"
        );
        if changed {
            self.revision += 1;
            for listener in &mut self.listeners {
                listener(&self.state, self.revision);
            }
        }
        changed
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(TodoState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
