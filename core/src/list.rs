//! List presentation helpers: aggregate counts and the empty state.

use std::fmt;

use crate::types::Todo;

/// Message shown when the collection is empty.
pub const EMPTY_STATE: &str = "No todos yet. Add your first todo to get started!";

/// Aggregate view of the collection, shown next to the list heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub completed: usize,
    pub total: usize,
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}

/// Derive the completed/total counts from the current collection.
pub fn summarize(todos: &[Todo]) -> ListSummary {
    ListSummary {
        completed: todos.iter().filter(|t| t.completed).count(),
        total: todos.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("todo {id}"),
            description: None,
            completed,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn summarize_counts_completed_and_total() {
        let todos = vec![todo(1, true), todo(2, false), todo(3, true)];
        let summary = summarize(&todos);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.to_string(), "2 of 3 completed");
    }

    #[test]
    fn summarize_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.to_string(), "0 of 0 completed");
    }
}
