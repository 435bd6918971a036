//! Overlapping-operation tests for the task session.
//!
//! These suites script the latency bands so that concurrent operations
//! resolve out of initiation order deterministically, exercising the
//! reconciliation paths that randomised latency only hits occasionally.

use super::helpers::{id_at, instant_session, scripted_session, store};
use rstest::rstest;
use std::time::Duration;
use taskboard::task::adapters::InMemoryStore;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlapping_toggles_keep_both_updates(store: InMemoryStore) {
    // First toggle resolves long after the second one.
    let session = scripted_session(store.clone(), [250, 10]);
    session.load_tasks().await;
    let tasks = session.tasks();
    let slow_id = id_at(&tasks, 0);
    let fast_id = id_at(&tasks, 1);

    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.toggle_task(slow_id).await }
    });
    // Give the slow toggle time to claim the first scripted delay.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fast = tokio::spawn({
        let session = session.clone();
        async move { session.toggle_task(fast_id).await }
    });

    slow.await.expect("slow toggle join");
    fast.await.expect("fast toggle join");

    let reconciled = session.tasks();
    assert!(
        reconciled
            .iter()
            .find(|task| task.id == slow_id)
            .is_some_and(|task| task.completed),
        "the slow toggle must flip exactly once"
    );
    assert!(
        reconciled
            .iter()
            .find(|task| task.id == fast_id)
            .is_some_and(|task| task.completed),
        "the fast toggle must flip exactly once"
    );
    assert!(!session.is_loading());
    assert_eq!(session.error(), None);

    // The persisted collection matches the fully reconciled in-memory one.
    let verifier = instant_session(store);
    verifier.refresh_tasks().await;
    assert_eq!(verifier.tasks(), reconciled);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_delete_landing_during_a_toggle_wins(store: InMemoryStore) {
    // The toggle's confirmation is slow; the delete finishes first.
    let session = scripted_session(store.clone(), [200]);
    session.load_tasks().await;
    let target = id_at(&session.tasks(), 0);

    let toggling = tokio::spawn({
        let session = session.clone();
        async move { session.toggle_task(target).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.delete_task(target).await;

    toggling.await.expect("toggle join");

    let reconciled = session.tasks();
    assert_eq!(reconciled.len(), 4);
    assert!(
        reconciled.iter().all(|task| task.id != target),
        "the toggle's confirmation must not resurrect the deleted task"
    );
    assert_eq!(session.error(), None);

    let verifier = instant_session(store);
    verifier.refresh_tasks().await;
    assert_eq!(verifier.tasks(), reconciled);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_add_landing_during_a_toggle_is_not_lost(store: InMemoryStore) {
    // Toggle confirmation resolves after the add completes.
    let session = scripted_session(store.clone(), [250, 10]);
    session.load_tasks().await;
    let target = id_at(&session.tasks(), 0);

    let toggling = tokio::spawn({
        let session = session.clone();
        async move { session.toggle_task(target).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.add_task("Slipped in mid-toggle").await;

    toggling.await.expect("toggle join");

    let reconciled = session.tasks();
    assert_eq!(reconciled.len(), 6);
    assert!(
        reconciled
            .iter()
            .find(|task| task.id == target)
            .is_some_and(|task| task.completed),
        "the toggle must land on the grown collection"
    );
    assert!(
        reconciled.iter().any(|task| task.text == "Slipped in mid-toggle"),
        "the concurrent add must survive the toggle's reconciliation"
    );

    let verifier = instant_session(store);
    verifier.refresh_tasks().await;
    assert_eq!(verifier.tasks(), reconciled);
}
