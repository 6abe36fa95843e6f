//! The presentation shell: screen state machine and application reducer.
//!
//! All user gestures arrive as [`AppAction`]s and run to completion inside
//! one reducer call. The feature is a pure state machine: no arm suspends,
//! touches I/O, or returns work for the runtime, so every arm returns
//! `Effect::None`.

use crate::lists::Lists;
use crate::types::{ListColor, ListDraft, ListId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use todo_lists_core::{
    SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};

/// The interaction state: which screen is showing
///
/// A tagged enum rather than visibility flags, so "at most one modal open"
/// holds by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// The list overview (no modal open)
    #[default]
    Overview,

    /// The add-list modal, with its form state
    AddList {
        /// The candidate name and color being edited
        draft: ListDraft,
    },

    /// The detail modal for one list
    ListDetail {
        /// The open list
        id: ListId,
        /// Transient new-item text
        entry: String,
        /// Whether the entry field holds input focus (keyboard visible)
        entry_focused: bool,
    },
}

/// Application state: the snapshot, the screen, and the blocking notice
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The list collection (the snapshot plus its id allocator)
    pub lists: Lists,
    /// Current screen
    pub screen: Screen,
    /// Blocking validation alert, presented modally until dismissed
    pub notice: Option<String>,
}

impl AppState {
    /// Creates an empty state on the overview screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state over an existing collection (e.g. seed data)
    #[must_use]
    pub fn with_lists(lists: Lists) -> Self {
        Self {
            lists,
            screen: Screen::Overview,
            notice: None,
        }
    }
}

/// User gestures driving the shell
///
/// All transitions are user-triggered and synchronous; there are no
/// background transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum AppAction {
    /// Open the add-list modal with a fresh draft
    OpenAddList,
    /// Close whichever modal is open and return to the overview
    CloseModal,
    /// Edit the add-list draft name
    NameChanged(String),
    /// Pick a palette color for the add-list draft
    ColorPicked(ListColor),
    /// Confirm the add-list form
    CreateList,
    /// Open a list's detail modal
    OpenListDetail(ListId),
    /// Edit the new-item entry text
    EntryChanged(String),
    /// Give the entry field input focus
    FocusEntry,
    /// Confirm the new-item entry
    AddTodo,
    /// Flip completion of the item at this position in the open list
    ToggleTodo(usize),
    /// Acknowledge the blocking notice
    DismissNotice,
}

/// Environment dependencies for the app reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Clock for stamping item creation and completion times
    pub clock: Arc<dyn Clock>,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for the presentation shell
#[derive(Clone, Debug, Default)]
pub struct AppReducer;

impl AppReducer {
    /// Creates a new `AppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per gesture reads better than helper soup
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::OpenAddList => {
                // A fresh draft every open: empty name, first palette color
                state.screen = Screen::AddList {
                    draft: ListDraft::default(),
                };
            }

            AppAction::CloseModal => {
                state.screen = Screen::Overview;
            }

            AppAction::NameChanged(name) => {
                if let Screen::AddList { draft } = &mut state.screen {
                    draft.name = name;
                }
            }

            AppAction::ColorPicked(color) => {
                if let Screen::AddList { draft } = &mut state.screen {
                    draft.color = color;
                }
            }

            AppAction::CreateList => {
                if let Screen::AddList { draft } = &state.screen {
                    match state.lists.add(draft.clone()) {
                        Ok(_) => {
                            state.screen = Screen::Overview;
                        }
                        Err(error) => {
                            // Modal and draft stay as they are
                            state.notice = Some(error.to_string());
                        }
                    }
                }
            }

            AppAction::OpenListDetail(id) => {
                // Unknown ids are ignored; the overview only offers live ids
                if state.lists.get(id).is_some() {
                    state.screen = Screen::ListDetail {
                        id,
                        entry: String::new(),
                        entry_focused: false,
                    };
                }
            }

            AppAction::EntryChanged(text) => {
                if let Screen::ListDetail { entry, .. } = &mut state.screen {
                    *entry = text;
                }
            }

            AppAction::FocusEntry => {
                if let Screen::ListDetail { entry_focused, .. } = &mut state.screen {
                    *entry_focused = true;
                }
            }

            AppAction::AddTodo => {
                let Screen::ListDetail {
                    id,
                    entry,
                    entry_focused,
                } = &mut state.screen
                else {
                    return smallvec![Effect::None];
                };

                let Some(list) = state.lists.get(*id).cloned() else {
                    return smallvec![Effect::None];
                };

                match list.with_todo(entry, env.clock.now()) {
                    Ok(updated) => {
                        // The id was just read from the snapshot, so the
                        // replace cannot miss
                        let _ = state.lists.update(updated);
                        entry.clear();
                        // Keyboard dismissed
                        *entry_focused = false;
                    }
                    Err(error) => {
                        // Blocking notice; the entry text stays as typed
                        state.notice = Some(error.to_string());
                    }
                }
            }

            AppAction::ToggleTodo(index) => {
                let Screen::ListDetail { id, .. } = &state.screen else {
                    return smallvec![Effect::None];
                };
                let id = *id;

                let Some(list) = state.lists.get(id).cloned() else {
                    return smallvec![Effect::None];
                };

                match list.with_toggled(index, env.clock.now()) {
                    Ok(updated) => {
                        let _ = state.lists.update(updated);
                    }
                    Err(error) => {
                        // A stale index cannot happen while dispatch is
                        // serialized; fatal in debug, ignored in release
                        debug_assert!(false, "toggle at stale index: {error}");
                    }
                }
            }

            AppAction::DismissNotice => {
                state.notice = None;
            }
        }

        smallvec![Effect::None]
    }
}
