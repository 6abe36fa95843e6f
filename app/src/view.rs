//! Derived view data: task counts and overview card projections.
//!
//! Everything here is recomputed from the snapshot at render time. Nothing
//! is cached, so a count can never go stale across commits.

use crate::types::{ListColor, ListId, TodoList};
use serde::Serialize;

/// Remaining/completed tallies for one list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    /// Items not yet completed
    pub remaining: usize,
    /// Items completed
    pub completed: usize,
}

impl TaskCounts {
    /// Counts the items of a list, O(n) over the item count
    #[must_use]
    pub fn for_list(list: &TodoList) -> Self {
        let completed = list.todos.iter().filter(|todo| todo.completed).count();
        Self {
            remaining: list.todos.len() - completed,
            completed,
        }
    }

    /// Total number of items
    #[must_use]
    pub const fn total(self) -> usize {
        self.remaining + self.completed
    }

    /// The detail header line, e.g. `2 of 5 tasks`
    #[must_use]
    pub fn summary(self) -> String {
        format!("{} of {} tasks", self.completed, self.total())
    }
}

/// Card data the overview renders for each list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListCard {
    /// The list's id, used to open its detail screen
    pub id: ListId,
    /// Display name
    pub name: String,
    /// Card background color
    pub color: ListColor,
    /// Tallies shown under the name
    pub counts: TaskCounts,
}

/// Projects the snapshot into overview cards, order preserved
#[must_use]
pub fn overview(lists: &[TodoList]) -> Vec<ListCard> {
    lists
        .iter()
        .map(|list| ListCard {
            id: list.id,
            name: list.name.clone(),
            color: list.color,
            counts: TaskCounts::for_list(list),
        })
        .collect()
}
