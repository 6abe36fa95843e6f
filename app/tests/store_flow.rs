//! End-to-end flows through the Store: gestures in, snapshot out.

#![allow(clippy::unwrap_used)] // Test code can unwrap
#![allow(missing_docs)]

use std::sync::Arc;

use todo_lists_app::{
    AppAction, AppEnvironment, AppReducer, AppState, ListColor, Lists, Screen, seed,
};
use todo_lists_core::environment::Clock;
use todo_lists_runtime::Store;
use todo_lists_testing::test_clock;

fn app_store(state: AppState) -> Store<AppState, AppAction, AppEnvironment, AppReducer> {
    Store::new(
        state,
        AppReducer::new(),
        AppEnvironment::new(Arc::new(test_clock())),
    )
}

#[tokio::test]
async fn create_list_then_add_item_lands_in_the_snapshot() {
    let store = app_store(AppState::new());

    store.send(AppAction::OpenAddList).await;
    store
        .send(AppAction::NameChanged("Groceries".to_string()))
        .await;
    store.send(AppAction::ColorPicked(ListColor::Green)).await;
    store.send(AppAction::CreateList).await;

    let id = store
        .state(|s| s.lists.as_slice().first().map(|list| list.id))
        .await
        .unwrap();

    store.send(AppAction::OpenListDetail(id)).await;
    store.send(AppAction::EntryChanged("Eggs".to_string())).await;
    store.send(AppAction::AddTodo).await;

    let snapshot = store.state(|s| s.lists.as_slice().to_vec()).await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "Groceries");
    assert_eq!(snapshot[0].color.hex(), "#5CD589");
    assert_eq!(snapshot[0].todos.len(), 1);
    assert_eq!(snapshot[0].todos[0].title, "Eggs");
    assert!(!snapshot[0].todos[0].completed);
}

#[tokio::test]
async fn every_commit_is_visible_to_the_next_read() {
    let store = app_store(AppState::new());
    let mut revisions = store.revisions();

    store.send(AppAction::OpenAddList).await;
    revisions.changed().await.unwrap();
    assert!(matches!(
        store.state(|s| s.screen.clone()).await,
        Screen::AddList { .. }
    ));

    store.send(AppAction::CloseModal).await;
    revisions.changed().await.unwrap();
    assert_eq!(store.state(|s| s.screen.clone()).await, Screen::Overview);
}

#[tokio::test]
async fn seeded_walkthrough_toggles_and_counts() {
    let clock = test_clock();
    let lists = Lists::from_seed(seed::starter_lists(clock.now()));
    let store = app_store(AppState::with_lists(lists));

    let (first_id, before) = store
        .state(|s| {
            let list = &s.lists.as_slice()[0];
            (list.id, todo_lists_app::TaskCounts::for_list(list))
        })
        .await;

    store.send(AppAction::OpenListDetail(first_id)).await;
    store.send(AppAction::ToggleTodo(0)).await;

    let after = store
        .state(|s| todo_lists_app::TaskCounts::for_list(s.lists.get(first_id).unwrap()))
        .await;

    assert_eq!(after.total(), before.total());
    assert_eq!(after.completed, before.completed + 1);
    assert_eq!(after.remaining, before.remaining - 1);
}

#[tokio::test]
async fn blank_entry_is_rejected_and_snapshot_untouched() {
    let clock = test_clock();
    let lists = Lists::from_seed(seed::starter_lists(clock.now()));
    let store = app_store(AppState::with_lists(lists));

    let first_id = store.state(|s| s.lists.as_slice()[0].id).await;
    let before = store.state(|s| s.lists.clone()).await;

    store.send(AppAction::OpenListDetail(first_id)).await;
    store.send(AppAction::EntryChanged("   ".to_string())).await;
    store.send(AppAction::AddTodo).await;

    let (lists_after, notice) = store
        .state(|s| (s.lists.clone(), s.notice.clone()))
        .await;

    assert_eq!(lists_after, before);
    assert!(notice.is_some());
}
