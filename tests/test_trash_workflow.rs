// tests/test_trash_workflow.rs
use std::sync::Arc;

use tmarks::application::services::trash_workflow::{TrashPhase, TrashWorkflow, TRASH_PAGE_SIZE};
use tmarks::domain::bookmark::Bookmark;
use tmarks::util::testing::{init_test_env, trashed_bookmark, MockTrashService, RecordingNotifier};

fn three_bookmarks() -> Vec<Bookmark> {
    vec![
        trashed_bookmark("b1", "First"),
        trashed_bookmark("b2", "Second"),
        trashed_bookmark("b3", "Third"),
    ]
}

fn workflow_with(
    bookmarks: Vec<Bookmark>,
) -> (TrashWorkflow, Arc<MockTrashService>, Arc<RecordingNotifier>) {
    init_test_env();
    let service = Arc::new(MockTrashService::with_trash(bookmarks));
    let notifier = Arc::new(RecordingNotifier::new());
    let workflow = TrashWorkflow::new(service.clone(), notifier.clone());
    (workflow, service, notifier)
}

#[tokio::test]
async fn given_trash_on_server_when_load_then_list_matches_server_order() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());

    assert_eq!(workflow.state().phase(), TrashPhase::Loading);
    workflow.load().await;

    let state = workflow.state();
    assert!(!state.loading);
    assert_eq!(state.phase(), TrashPhase::NonEmpty);
    let ids: Vec<&str> = state.bookmarks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2", "b3"]);
    assert_eq!(service.calls(), vec![format!("fetch_trash:{}", TRASH_PAGE_SIZE)]);
}

#[tokio::test]
async fn given_failing_server_when_load_then_error_shown_and_list_unchanged() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());
    service.set_fail_fetch(true);

    workflow.load().await;

    let state = workflow.state();
    assert!(!state.loading);
    assert_eq!(state.phase(), TrashPhase::Error);
    assert!(state.bookmarks.is_empty());
}

#[tokio::test]
async fn given_error_phase_when_load_again_then_recovers() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());
    service.set_fail_fetch(true);
    workflow.load().await;
    assert_eq!(workflow.state().phase(), TrashPhase::Error);

    service.set_fail_fetch(false);
    workflow.load().await;

    assert_eq!(workflow.state().phase(), TrashPhase::NonEmpty);
    assert_eq!(workflow.state().error, None);
    assert_eq!(workflow.state().bookmarks.len(), 3);
}

#[tokio::test]
async fn given_restore_request_when_not_yet_confirmed_then_no_remote_call() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.restore("b2", "Second");

    let request = workflow.pending_confirmation().expect("request pending");
    assert!(!request.danger);
    assert!(request.message.contains("Second"));
    // only the initial fetch went out
    assert_eq!(service.calls().len(), 1);
}

#[tokio::test]
async fn given_confirmed_restore_when_server_succeeds_then_only_that_entry_removed() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.restore("b2", "Second");
    workflow.confirm().await;

    let ids: Vec<&str> = workflow
        .state()
        .bookmarks
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b1", "b3"]);
    assert!(service.calls().contains(&"restore:b2".to_string()));
    assert_eq!(notifier.successes(), vec!["Bookmark restored"]);
    assert!(workflow.pending_confirmation().is_none());
}

#[tokio::test]
async fn given_cancelled_confirmation_then_no_remote_call_and_list_unchanged() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.restore("b2", "Second");
    workflow.cancel_confirmation();

    assert!(workflow.pending_confirmation().is_none());
    assert_eq!(workflow.state().bookmarks.len(), 3);
    assert_eq!(service.calls().len(), 1);
    assert!(notifier.successes().is_empty());
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn given_confirmed_restore_when_server_fails_then_list_unchanged_and_error_notified() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;
    service.set_fail_mutations(true);

    workflow.restore("b2", "Second");
    workflow.confirm().await;

    assert_eq!(workflow.state().bookmarks.len(), 3);
    assert!(notifier.successes().is_empty());
    assert_eq!(notifier.errors().len(), 1);
}

#[tokio::test]
async fn given_confirmed_permanent_delete_then_entry_removed_and_danger_flagged() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.permanently_delete("b1", "First");
    let request = workflow.pending_confirmation().expect("request pending");
    assert!(request.danger);
    assert!(request.message.contains("First"));

    workflow.confirm().await;

    let ids: Vec<&str> = workflow
        .state()
        .bookmarks
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b2", "b3"]);
    assert!(service.calls().contains(&"permanent_delete:b1".to_string()));
    assert_eq!(notifier.successes(), vec!["Bookmark permanently deleted"]);
}

#[tokio::test]
async fn given_three_bookmarks_when_empty_all_confirmed_then_count_reported_and_list_cleared() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.empty_all();
    let request = workflow.pending_confirmation().expect("request pending");
    assert!(request.danger);
    assert!(request.message.contains('3'));

    workflow.confirm().await;

    assert!(workflow.state().bookmarks.is_empty());
    assert_eq!(workflow.state().phase(), TrashPhase::Empty);
    assert!(service.calls().contains(&"empty_trash".to_string()));
    let successes = notifier.successes();
    assert_eq!(successes.len(), 1);
    assert!(successes[0].contains('3'));
}

#[tokio::test]
async fn given_empty_list_when_empty_all_then_no_request_and_no_remote_call() {
    let (mut workflow, service, _) = workflow_with(Vec::new());
    workflow.load().await;
    assert_eq!(workflow.state().phase(), TrashPhase::Empty);

    workflow.empty_all();

    assert!(workflow.pending_confirmation().is_none());
    assert_eq!(service.calls(), vec![format!("fetch_trash:{}", TRASH_PAGE_SIZE)]);
}

#[tokio::test]
async fn given_no_pending_confirmation_when_confirm_then_nothing_happens() {
    let (mut workflow, service, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.confirm().await;

    assert_eq!(service.calls().len(), 1);
    assert!(notifier.successes().is_empty());
}

#[tokio::test]
async fn given_confirmed_request_when_confirm_again_then_single_remote_call() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.restore("b1", "First");
    workflow.confirm().await;
    workflow.confirm().await;

    let restores = service
        .calls()
        .iter()
        .filter(|c| c.starts_with("restore:"))
        .count();
    assert_eq!(restores, 1);
}

#[tokio::test]
async fn given_newer_request_when_raised_then_it_replaces_the_pending_one() {
    let (mut workflow, service, _) = workflow_with(three_bookmarks());
    workflow.load().await;

    workflow.restore("b1", "First");
    workflow.permanently_delete("b2", "Second");
    workflow.confirm().await;

    assert!(service.calls().contains(&"permanent_delete:b2".to_string()));
    assert!(!service.calls().iter().any(|c| c.starts_with("restore:")));
}

#[tokio::test]
async fn given_revoked_liveness_when_load_settles_then_state_not_applied() {
    let (mut workflow, _, _) = workflow_with(three_bookmarks());
    let handle = workflow.liveness_handle();

    handle.revoke();
    workflow.load().await;

    // the fetched page is discarded, the view never leaves its initial phase
    assert!(workflow.state().bookmarks.is_empty());
    assert_eq!(workflow.state().phase(), TrashPhase::Loading);
}

#[tokio::test]
async fn given_revoked_liveness_when_confirmed_mutation_settles_then_no_notification() {
    let (mut workflow, _, notifier) = workflow_with(three_bookmarks());
    workflow.load().await;
    workflow.restore("b1", "First");

    workflow.liveness_handle().revoke();
    workflow.confirm().await;

    assert!(notifier.successes().is_empty());
    assert!(notifier.errors().is_empty());
    assert_eq!(workflow.state().bookmarks.len(), 3);
}
