//! Scripted CLI walkthrough acting as the rendering surface.
//!
//! Drives the store through the same gestures the mobile screens would:
//! renders overview cards, opens the add-list modal, creates a list, opens
//! its detail, adds items (including a rejected blank entry), toggles
//! completion, and finally dumps the snapshot as JSON.

use std::sync::Arc;

use todo_lists_app::{
    AppAction, AppEnvironment, AppReducer, AppState, ListColor, ListId, Lists, seed, view,
};
use todo_lists_core::environment::{Clock, SystemClock};
use todo_lists_runtime::Store;

type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let clock = Arc::new(SystemClock);
    let lists = Lists::from_seed(seed::starter_lists(clock.now()));
    tracing::info!(lists = lists.len(), "Seeded store from starter data");

    let store = Store::new(
        AppState::with_lists(lists),
        AppReducer::new(),
        AppEnvironment::new(clock),
    );

    println!("=== Todo Lists ===");
    render_overview(&store).await;

    // Create a list through the add-list modal
    println!("\nCreating a new list...");
    store.send(AppAction::OpenAddList).await;
    store
        .send(AppAction::NameChanged("Groceries".to_string()))
        .await;
    store.send(AppAction::ColorPicked(ListColor::Teal)).await;
    store.send(AppAction::CreateList).await;
    render_overview(&store).await;

    // Open the new list's detail and add items
    let id = store
        .state(|s| s.lists.as_slice().last().map(|list| list.id))
        .await
        .ok_or("seeded store cannot be empty")?;
    store.send(AppAction::OpenListDetail(id)).await;
    render_detail(&store, id).await;

    println!("\nAdding tasks...");
    store.send(AppAction::FocusEntry).await;
    store.send(AppAction::EntryChanged("Eggs".to_string())).await;
    store.send(AppAction::AddTodo).await;
    store
        .send(AppAction::EntryChanged("Coffee beans".to_string()))
        .await;
    store.send(AppAction::AddTodo).await;

    // A blank entry is rejected with a blocking notice
    store.send(AppAction::EntryChanged("   ".to_string())).await;
    store.send(AppAction::AddTodo).await;
    if let Some(notice) = store.state(|s| s.notice.clone()).await {
        println!("! {notice}");
        store.send(AppAction::DismissNotice).await;
    }
    render_detail(&store, id).await;

    println!("\nChecking off the first task...");
    store.send(AppAction::ToggleTodo(0)).await;
    render_detail(&store, id).await;
    store.send(AppAction::CloseModal).await;

    render_overview(&store).await;

    // Final snapshot as JSON
    let snapshot = store.state(|s| s.lists.as_slice().to_vec()).await;
    println!("\nFinal snapshot:\n{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

async fn render_overview(store: &AppStore) {
    let cards = store.state(|s| view::overview(s.lists.as_slice())).await;

    println!("\nTodo Lists");
    for card in cards {
        println!(
            "  {:<18} {}  {} Remaining / {} Completed",
            card.name, card.color, card.counts.remaining, card.counts.completed
        );
    }
}

async fn render_detail(store: &AppStore, id: ListId) {
    let Some((list, counts)) = store
        .state(|s| {
            s.lists
                .get(id)
                .map(|list| (list.clone(), view::TaskCounts::for_list(list)))
        })
        .await
    else {
        return;
    };

    println!("\n{} ({})", list.name, counts.summary());
    if list.todos.is_empty() {
        println!("  No tasks available. Add a new task!");
    }
    for todo in &list.todos {
        let mark = if todo.completed { "x" } else { " " };
        println!("  [{mark}] {}", todo.title);
    }
}
