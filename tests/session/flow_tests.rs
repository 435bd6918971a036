//! End-to-end flows through the public session API.

use super::helpers::{instant_session, store};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use taskboard::task::{
    adapters::{InMemoryStore, RandomLatency},
    ports::KeyValueStore,
    services::{DefaultTaskBackend, TaskSession},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_run_bootstraps_the_default_collection(store: InMemoryStore) {
    let session = instant_session(store.clone());

    session.load_tasks().await;

    let tasks = session.tasks();
    assert_eq!(tasks.len(), 5);
    assert_eq!(
        tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| task.text.as_str())
            .collect::<Vec<_>>(),
        vec!["Update project timeline document"]
    );

    // A brand-new session over the same store sees the persisted seeds.
    let second = instant_session(store);
    second.load_tasks().await;
    assert_eq!(second.tasks(), tasks);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_data_is_picked_up_on_first_load(store: InMemoryStore) {
    let legacy = json!([
        { "id": 11, "text": "Carried from the old layout", "completed": false },
        { "id": 12, "text": "Also carried", "completed": true },
    ]);
    store
        .set("tasks", &legacy.to_string())
        .expect("preseed legacy key");

    let session = instant_session(store);
    session.load_tasks().await;

    let tasks = session.tasks();
    assert_eq!(
        tasks.iter().map(|task| task.id.value()).collect::<Vec<_>>(),
        vec![11, 12]
    );
    assert_eq!(session.error(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_text_is_stored_in_sanitised_form(store: InMemoryStore) {
    let session = instant_session(store.clone());
    session.load_tasks().await;

    session.add_task("  hello   world  ").await;

    let stored = store
        .get("task-app_tasks")
        .expect("store read")
        .expect("collection persisted");
    assert!(stored.contains("\"hello world\""));
    assert!(!stored.contains("hello   world"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_input_changes_nothing(store: InMemoryStore) {
    let session = instant_session(store);
    session.load_tasks().await;
    let before = session.tasks();

    session.add_task("").await;
    assert_eq!(session.error().as_deref(), Some("Task description cannot be empty."));
    assert_eq!(session.tasks(), before);

    session.add_task(&"a".repeat(501)).await;
    assert_eq!(
        session.error().as_deref(),
        Some("Task description cannot exceed 500 characters.")
    );
    assert_eq!(session.tasks(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_reads_back_exactly_what_is_persisted(store: InMemoryStore) {
    let session = instant_session(store.clone());
    session.load_tasks().await;
    session.add_task("Survives a refresh").await;
    let before = session.tasks();

    session.refresh_tasks().await;

    assert_eq!(session.tasks(), before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn refresh_of_an_emptied_store_yields_an_empty_collection(store: InMemoryStore) {
    let session = instant_session(store.clone());
    session.load_tasks().await;
    store.remove("task-app_tasks").expect("clear behind the session");

    session.refresh_tasks().await;

    assert!(session.tasks().is_empty());
    assert_eq!(session.error(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_full_journey_with_randomised_latency(store: InMemoryStore) {
    let session = TaskSession::new(Arc::new(DefaultTaskBackend::new(
        store,
        Arc::new(RandomLatency::default()),
        Arc::new(DefaultClock),
    )));

    session.load_tasks().await;
    assert_eq!(session.tasks().len(), 5);

    session.add_task("Ship the release").await;
    assert_eq!(session.tasks().len(), 6);

    let first = session.tasks().first().map(|task| task.id).expect("seeded task");
    session.toggle_task(first).await;
    assert!(
        session
            .tasks()
            .iter()
            .find(|task| task.id == first)
            .is_some_and(|task| task.completed)
    );

    session.delete_task(first).await;
    assert_eq!(session.tasks().len(), 5);
    assert!(session.tasks().iter().all(|task| task.id != first));

    session.refresh_tasks().await;
    assert_eq!(session.tasks().len(), 5);
    assert_eq!(session.error(), None);
}
