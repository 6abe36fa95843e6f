//! Seed data: the initial lists presented on first launch.
//!
//! An external collaborator from the store's point of view: it supplies an
//! ordered sequence of lists with unique positive ids, non-empty names,
//! palette colors, and pre-populated item sequences, ingested via
//! [`crate::lists::Lists::from_seed`].

use crate::types::{ListColor, ListId, TodoItem, TodoList};
use chrono::{DateTime, Utc};

fn open(title: &str, at: DateTime<Utc>) -> TodoItem {
    TodoItem::new(title.to_string(), at)
}

fn done(title: &str, at: DateTime<Utc>) -> TodoItem {
    let mut item = TodoItem::new(title.to_string(), at);
    item.toggle(at);
    item
}

/// Starter lists for a first launch
#[must_use]
pub fn starter_lists(created_at: DateTime<Utc>) -> Vec<TodoList> {
    vec![
        TodoList {
            id: ListId::new(1),
            name: "Plan a Trip".to_string(),
            color: ListColor::Indigo,
            todos: vec![
                open("Book flight", created_at),
                done("Passport check", created_at),
                open("Reserve hotel room", created_at),
                open("Pack luggage", created_at),
            ],
        },
        TodoList {
            id: ListId::new(2),
            name: "Errands".to_string(),
            color: ListColor::Green,
            todos: vec![
                done("Buy milk", created_at),
                open("Plan a workout", created_at),
                open("Go to the gym", created_at),
            ],
        },
        TodoList {
            id: ListId::new(3),
            name: "Birthday Party".to_string(),
            color: ListColor::Pink,
            todos: vec![
                open("Get balloons", created_at),
                done("Send invitations", created_at),
                open("Make dinner reservation", created_at),
            ],
        },
    ]
}
