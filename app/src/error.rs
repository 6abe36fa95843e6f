//! Error types for list and todo item operations.

use crate::types::ListId;
use thiserror::Error;

/// Errors returned by the list collection and the item transforms
///
/// Validation errors (`EmptyTitle`, `EmptyName`) are surfaced to the user
/// as a blocking notice. `IndexOutOfRange` is a programmer error under the
/// single-dispatcher model; `ListNotFound` is a benign no-op at the shell
/// level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Item creation with blank or whitespace-only text
    #[error("Todo cannot be empty!")]
    EmptyTitle,

    /// List creation with blank or whitespace-only name
    #[error("List name cannot be empty!")]
    EmptyName,

    /// Toggle requested at a position outside the item sequence
    #[error("todo index {index} out of range for list of {len} items")]
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// The item count at the time of the request
        len: usize,
    },

    /// Update submitted for an id absent from the snapshot
    #[error("list {0} not found")]
    ListNotFound(ListId),
}
