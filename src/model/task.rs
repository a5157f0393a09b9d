use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique for the lifetime of a [`TodoState`](super::TodoState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Task text as typed (not trimmed)
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }

    /// Checkbox shown for this task's completion state
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Every filter, in selector order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Whether a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Label used by the footer selectors
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Next filter in selector order, wrapping around
    pub fn cycle(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Parse a filter name ("all", "active", "completed"), case-insensitive
    pub fn parse(s: &str) -> Option<Filter> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> Task {
        Task {
            id: TaskId(1),
            text: "x".into(),
            completed,
        }
    }

    #[test]
    fn filter_matches() {
        assert!(Filter::All.matches(&task(false)));
        assert!(Filter::All.matches(&task(true)));
        assert!(Filter::Active.matches(&task(false)));
        assert!(!Filter::Active.matches(&task(true)));
        assert!(!Filter::Completed.matches(&task(false)));
        assert!(Filter::Completed.matches(&task(true)));
    }

    #[test]
    fn filter_cycle_wraps() {
        assert_eq!(Filter::All.cycle(), Filter::Active);
        assert_eq!(Filter::Active.cycle(), Filter::Completed);
        assert_eq!(Filter::Completed.cycle(), Filter::All);
    }

    #[test]
    fn filter_parse() {
        assert_eq!(Filter::parse("Active"), Some(Filter::Active));
        assert_eq!(Filter::parse("COMPLETED"), Some(Filter::Completed));
        assert_eq!(Filter::parse("done"), None);
        assert_eq!(Filter::parse("everything"), None);
    }

    #[test]
    fn filter_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            filter: Filter,
        }
        let w: Wrap = toml::from_str("filter = \"completed\"").unwrap();
        assert_eq!(w.filter, Filter::Completed);
    }

    #[test]
    fn new_task_is_incomplete() {
        let t = Task::new(TaskId(7), "buy milk".into());
        assert!(!t.completed);
        assert_eq!(t.checkbox(), "[ ]");
        assert_eq!(t.id.to_string(), "#7");
    }
}
