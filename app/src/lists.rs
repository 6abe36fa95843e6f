//! The list collection: owns the snapshot and its add/update operations.
//!
//! [`Lists`] holds the ordered sequence of lists plus the id allocator.
//! Adding appends exactly one element; updating replaces exactly one element
//! matched by id, position preserved. All other access is read-only.

use crate::error::ListError;
use crate::types::{ListDraft, ListId, TodoList};
use serde::{Deserialize, Serialize};

/// The ordered collection of todo lists
///
/// Ids come from a monotonically increasing allocator that only ever moves
/// forward, so they stay collision-free even if deletions arrive later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lists {
    entries: Vec<TodoList>,
    next_id: u64,
}

impl Lists {
    /// Creates an empty collection with the allocator at 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a collection from seed data
    ///
    /// The allocator is seeded past the largest seeded id. Seed ids must be
    /// unique and positive; the seed provider owns that contract.
    #[must_use]
    pub fn from_seed(seed: Vec<TodoList>) -> Self {
        debug_assert!(
            seed.iter().all(|list| list.id.value() > 0),
            "seed ids must be positive"
        );
        debug_assert!(
            {
                let mut ids: Vec<_> = seed.iter().map(|list| list.id).collect();
                ids.sort_unstable();
                ids.dedup();
                ids.len() == seed.len()
            },
            "seed ids must be unique"
        );

        let next_id = seed
            .iter()
            .map(|list| list.id.value())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            entries: seed,
            next_id,
        }
    }

    /// Appends a new list built from the draft
    ///
    /// The name is trimmed; on success the new list starts with no items
    /// and the allocated id is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyName`] if the trimmed name is empty; the
    /// snapshot is untouched in that case.
    pub fn add(&mut self, draft: ListDraft) -> Result<ListId, ListError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }

        let id = ListId::new(self.next_id);
        self.next_id += 1;

        self.entries
            .push(TodoList::new(id, name.to_string(), draft.color));
        Ok(id)
    }

    /// Replaces the list whose id matches `updated.id`, position preserved
    ///
    /// This is a full-value replace: no merge semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ListNotFound`] if no element carries the id;
    /// the snapshot is untouched in that case.
    pub fn update(&mut self, updated: TodoList) -> Result<(), ListError> {
        match self.entries.iter_mut().find(|list| list.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(ListError::ListNotFound(updated.id)),
        }
    }

    /// Returns the list with the given id, if present
    #[must_use]
    pub fn get(&self, id: ListId) -> Option<&TodoList> {
        self.entries.iter().find(|list| list.id == id)
    }

    /// The current snapshot as a read-only slice
    #[must_use]
    pub fn as_slice(&self) -> &[TodoList] {
        &self.entries
    }

    /// Iterates over the lists in order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoList> {
        self.entries.iter()
    }

    /// Number of lists in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lists {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Lists {
    type Item = &'a TodoList;
    type IntoIter = std::slice::Iter<'a, TodoList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::ListColor;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn add_assigns_sequential_ids_and_empty_items() {
        let mut lists = Lists::new();

        let first = lists
            .add(ListDraft::new("Groceries", ListColor::Green))
            .unwrap();
        let second = lists.add(ListDraft::new("Work", ListColor::Teal)).unwrap();

        assert_eq!(first, ListId::new(1));
        assert_eq!(second, ListId::new(2));
        assert_eq!(lists.len(), 2);
        assert!(lists.get(first).unwrap().todos.is_empty());
    }

    #[test]
    fn add_trims_the_name() {
        let mut lists = Lists::new();
        let id = lists
            .add(ListDraft::new("  Groceries  ", ListColor::Green))
            .unwrap();

        assert_eq!(lists.get(id).unwrap().name, "Groceries");
    }

    #[test]
    fn add_rejects_blank_names_without_mutating() {
        let mut lists = Lists::new();

        for name in ["", "   "] {
            let err = lists.add(ListDraft::new(name, ListColor::Green)).unwrap_err();
            assert_eq!(err, ListError::EmptyName);
        }

        assert!(lists.is_empty());
        // The allocator did not move either
        assert_eq!(
            lists.add(ListDraft::new("Groceries", ListColor::Green)).unwrap(),
            ListId::new(1)
        );
    }

    #[test]
    fn update_replaces_exactly_the_matched_element() {
        let mut lists = Lists::new();
        let first = lists
            .add(ListDraft::new("Groceries", ListColor::Green))
            .unwrap();
        let second = lists.add(ListDraft::new("Work", ListColor::Teal)).unwrap();
        let untouched = lists.get(second).unwrap().clone();

        let updated = lists
            .get(first)
            .unwrap()
            .clone()
            .with_todo("Eggs", fixed_now())
            .unwrap();
        lists.update(updated).unwrap();

        // Position preserved, one element replaced, the other identical
        assert_eq!(lists.as_slice()[0].id, first);
        assert_eq!(lists.as_slice()[0].todos.len(), 1);
        assert_eq!(lists.as_slice()[1], untouched);
    }

    #[test]
    fn update_unknown_id_is_an_error_and_leaves_snapshot_unchanged() {
        let mut lists = Lists::new();
        lists
            .add(ListDraft::new("Groceries", ListColor::Green))
            .unwrap();
        let before = lists.clone();

        let stray = TodoList::new(ListId::new(99), "Stray".to_string(), ListColor::Red);
        let err = lists.update(stray).unwrap_err();

        assert_eq!(err, ListError::ListNotFound(ListId::new(99)));
        assert_eq!(lists, before);
    }

    #[test]
    fn from_seed_allocates_above_the_largest_seeded_id() {
        let seed = vec![
            TodoList::new(ListId::new(3), "Plan a Trip".to_string(), ListColor::Indigo),
            TodoList::new(ListId::new(7), "Errands".to_string(), ListColor::Green),
        ];
        let mut lists = Lists::from_seed(seed);

        let id = lists.add(ListDraft::new("Fresh", ListColor::Pink)).unwrap();
        assert_eq!(id, ListId::new(8));
    }

    #[test]
    fn from_seed_empty_starts_at_one() {
        let mut lists = Lists::from_seed(Vec::new());
        let id = lists.add(ListDraft::new("First", ListColor::Green)).unwrap();
        assert_eq!(id, ListId::new(1));
    }

    proptest! {
        // Every successful add grows the snapshot by one and ids never collide
        #[test]
        fn add_sequences_keep_ids_unique(names in proptest::collection::vec("[a-z]{1,12}", 1..32)) {
            let mut lists = Lists::new();
            let palette = ListColor::ALL;

            for (i, name) in names.iter().enumerate() {
                lists.add(ListDraft::new(name.clone(), palette[i % palette.len()])).unwrap();
            }

            prop_assert_eq!(lists.len(), names.len());

            let mut ids: Vec<_> = lists.iter().map(|list| list.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), names.len());
        }
    }
}
