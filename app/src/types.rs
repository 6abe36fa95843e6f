//! Domain types for todo lists.
//!
//! A [`TodoList`] is a named, color-tagged, ordered collection of
//! [`TodoItem`]s. Lists are only ever replaced wholesale in the collection:
//! items are transformed by value ([`TodoList::with_todo`],
//! [`TodoList::with_toggled`]) and the whole list re-submitted, so the
//! collection's update operation stays the single point of mutation.

use crate::error::ListError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a todo list
///
/// Assigned by the collection from a monotonically increasing allocator;
/// unique within the collection for the lifetime of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    /// Creates a `ListId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A color from the fixed list palette
///
/// Serializes as its hex string, so snapshots round-trip the literal
/// `"#5CD589"` form the palette was defined with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListColor {
    /// `#5CD589`
    #[default]
    Green,
    /// `#24A69D`
    Teal,
    /// `#595BD9`
    Indigo,
    /// `#8022D9`
    Purple,
    /// `#D159D8`
    Pink,
    /// `#D85963`
    Red,
    /// `#D88559`
    Orange,
}

impl ListColor {
    /// The full palette, in picker order
    pub const ALL: [Self; 7] = [
        Self::Green,
        Self::Teal,
        Self::Indigo,
        Self::Purple,
        Self::Pink,
        Self::Red,
        Self::Orange,
    ];

    /// The hex string for this color
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Green => "#5CD589",
            Self::Teal => "#24A69D",
            Self::Indigo => "#595BD9",
            Self::Purple => "#8022D9",
            Self::Pink => "#D159D8",
            Self::Red => "#D85963",
            Self::Orange => "#D88559",
        }
    }

    /// Look up a palette entry by its hex string
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.hex() == hex)
    }
}

impl std::fmt::Display for ListColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl Serialize for ListColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for ListColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown palette color: {hex}")))
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Title of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// When the todo was completed (if completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, uncompleted todo item
    #[must_use]
    pub const fn new(title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            title,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flips the completion flag, maintaining `completed_at`
    pub fn toggle(&mut self, at: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(at);
    }
}

/// A named, color-tagged, ordered collection of todo items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier, assigned by the collection
    pub id: ListId,
    /// Display name, non-empty
    pub name: String,
    /// Palette color, chosen at creation and never changed
    pub color: ListColor,
    /// Items in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoList {
    /// Creates a new list with no items
    #[must_use]
    pub const fn new(id: ListId, name: String, color: ListColor) -> Self {
        Self {
            id,
            name,
            color,
            todos: Vec::new(),
        }
    }

    /// Returns this list with a new item appended
    ///
    /// The title is trimmed; the validation happens before any mutation, so
    /// on failure the original value is dropped unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyTitle`] if the trimmed title is empty.
    pub fn with_todo(mut self, title: &str, created_at: DateTime<Utc>) -> Result<Self, ListError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyTitle);
        }

        self.todos.push(TodoItem::new(trimmed.to_string(), created_at));
        Ok(self)
    }

    /// Returns this list with the completion flag at `index` flipped
    ///
    /// Callers must submit the result to the collection's update operation
    /// immediately; the transform itself never touches the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index` is not a valid
    /// position in the item sequence.
    pub fn with_toggled(mut self, index: usize, at: DateTime<Utc>) -> Result<Self, ListError> {
        let len = self.todos.len();
        let Some(todo) = self.todos.get_mut(index) else {
            return Err(ListError::IndexOutOfRange { index, len });
        };

        todo.toggle(at);
        Ok(self)
    }
}

/// The add-list form state: a candidate name and palette color
///
/// `Default` is an empty name and the palette's first entry, matching what
/// the add-list modal presents on each open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDraft {
    /// Candidate display name
    pub name: String,
    /// Selected palette color
    pub color: ListColor,
}

impl ListDraft {
    /// Creates a draft with the given name and color
    #[must_use]
    pub fn new(name: impl Into<String>, color: ListColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}
