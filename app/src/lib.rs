//! Todo list application built on the reducer/store architecture.
//!
//! Users create named, color-tagged lists, add items to each list, and
//! toggle item completion. This crate provides:
//!
//! - The domain model ([`types`]) and its pure value transforms
//! - The list collection ([`lists`]) owning the snapshot and id allocation
//! - Derived view data ([`view`]): counts and overview cards
//! - The presentation shell ([`reducer`]): screen state machine and reducer
//! - Seed data ([`seed`]) for first launch
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_lists_app::{AppAction, AppEnvironment, AppReducer, AppState};
//! use todo_lists_core::environment::SystemClock;
//! use todo_lists_runtime::Store;
//!
//! # async fn example() {
//! // Create environment and store
//! let env = AppEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(AppState::new(), AppReducer::new(), env);
//!
//! // Create a list through the add-list modal
//! store.send(AppAction::OpenAddList).await;
//! store.send(AppAction::NameChanged("Groceries".to_string())).await;
//! store.send(AppAction::CreateList).await;
//!
//! // Read the snapshot
//! let count = store.state(|s| s.lists.len()).await;
//! println!("Lists: {count}");
//! # }
//! ```

pub mod error;
pub mod lists;
pub mod reducer;
pub mod seed;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use error::ListError;
pub use lists::Lists;
pub use reducer::{AppAction, AppEnvironment, AppReducer, AppState, Screen};
pub use types::{ListColor, ListDraft, ListId, TodoItem, TodoList};
pub use view::{ListCard, TaskCounts, overview};
