// src/application/services/trash_workflow.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::application::services::notification::NotificationService;
use crate::application::services::trash_service::TrashService;
use crate::domain::bookmark::Bookmark;

/// Upper bound on how many trashed bookmarks a single load fetches.
pub const TRASH_PAGE_SIZE: usize = 100;

/// Users get a generic message; the underlying cause only goes to the log.
const LOAD_ERROR_MESSAGE: &str = "Failed to load the bookmark trash";

/// Display phase of the trash view.
///
/// Loading and Error are mutually exclusive terminal display states; the list
/// itself is only rendered in the Populated phases. Error is not a dead end:
/// re-invoking [`TrashWorkflow::load`] retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashPhase {
    Loading,
    Error,
    Empty,
    NonEmpty,
}

/// Page-local copy of the server-held trash collection.
#[derive(Debug, Default)]
pub struct TrashListState {
    pub bookmarks: Vec<Bookmark>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TrashListState {
    pub fn phase(&self) -> TrashPhase {
        if self.loading {
            TrashPhase::Loading
        } else if self.error.is_some() {
            TrashPhase::Error
        } else if self.bookmarks.is_empty() {
            TrashPhase::Empty
        } else {
            TrashPhase::NonEmpty
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingTrashAction {
    Restore { id: String },
    PermanentDelete { id: String },
    EmptyAll,
}

/// A confirmation the user still has to answer.
///
/// At most one request is pending at a time. Confirm and cancel both clear it
/// synchronously before any effect runs; the remote call only happens on
/// confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub title: String,
    pub message: String,
    pub danger: bool,
    action: PendingTrashAction,
}

/// Handle for tearing down a workflow whose async operation may still be
/// suspended at the network boundary. Once revoked, state-applying steps after
/// an await are skipped.
#[derive(Debug, Clone)]
pub struct LivenessHandle(Arc<AtomicBool>);

impl LivenessHandle {
    pub fn revoke(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns the deleted-bookmarks list and its lifecycle operations.
///
/// All mutating operations go through a [`ConfirmationRequest`]; the local
/// list is only touched in the success branch after the awaited remote call,
/// so it never diverges from the server without a confirmed remote effect.
#[derive(Debug)]
pub struct TrashWorkflow {
    service: Arc<dyn TrashService>,
    notifier: Arc<dyn NotificationService>,
    state: TrashListState,
    pending: Option<ConfirmationRequest>,
    in_flight: bool,
    alive: Arc<AtomicBool>,
}

impl TrashWorkflow {
    pub fn new(service: Arc<dyn TrashService>, notifier: Arc<dyn NotificationService>) -> Self {
        Self {
            service,
            notifier,
            // The view starts out loading until the first load() settles.
            state: TrashListState {
                bookmarks: Vec::new(),
                loading: true,
                error: None,
            },
            pending: None,
            in_flight: false,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn state(&self) -> &TrashListState {
        &self.state
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmationRequest> {
        self.pending.as_ref()
    }

    pub fn liveness_handle(&self) -> LivenessHandle {
        LivenessHandle(Arc::clone(&self.alive))
    }

    fn is_revoked(&self) -> bool {
        !self.alive.load(Ordering::SeqCst)
    }

    /// Fetches the trash page and replaces the local list on success.
    ///
    /// On failure the prior list is kept, the cause is logged and a generic
    /// error message is exposed through the state. Loading always ends up
    /// cleared, whichever way the call settles.
    #[instrument(skip(self), level = "debug")]
    pub async fn load(&mut self) {
        if self.in_flight {
            debug!("trash operation already in flight, ignoring load");
            return;
        }
        self.in_flight = true;
        self.state.loading = true;
        self.state.error = None;

        let result = self.service.fetch_trash(TRASH_PAGE_SIZE).await;

        self.in_flight = false;
        if self.is_revoked() {
            return;
        }
        match result {
            Ok(bookmarks) => {
                self.state.bookmarks = bookmarks;
            }
            Err(e) => {
                error!("Failed to load bookmark trash: {}", e);
                self.state.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Raises a confirmation for restoring a single bookmark.
    pub fn restore(&mut self, id: &str, title: &str) {
        self.raise_confirmation(ConfirmationRequest {
            title: "Restore bookmark".to_string(),
            message: format!("Restore \"{}\"?", title),
            danger: false,
            action: PendingTrashAction::Restore { id: id.to_string() },
        });
    }

    /// Raises a danger-styled confirmation for permanently deleting a single
    /// bookmark.
    pub fn permanently_delete(&mut self, id: &str, title: &str) {
        self.raise_confirmation(ConfirmationRequest {
            title: "Delete permanently".to_string(),
            message: format!("Permanently delete \"{}\"? This cannot be undone.", title),
            danger: true,
            action: PendingTrashAction::PermanentDelete { id: id.to_string() },
        });
    }

    /// Raises a danger-styled confirmation for emptying the whole trash.
    /// No-op while the list is empty: no request is raised and no remote call
    /// will be issued.
    pub fn empty_all(&mut self) {
        let count = self.state.bookmarks.len();
        if count == 0 {
            return;
        }
        self.raise_confirmation(ConfirmationRequest {
            title: "Empty trash".to_string(),
            message: format!(
                "Permanently delete the {} bookmarks in the trash? This cannot be undone.",
                count
            ),
            danger: true,
            action: PendingTrashAction::EmptyAll,
        });
    }

    fn raise_confirmation(&mut self, request: ConfirmationRequest) {
        if self.pending.is_some() {
            debug!("replacing pending confirmation with a newer request");
        }
        self.pending = Some(request);
    }

    /// Clears the pending confirmation without any side effect.
    pub fn cancel_confirmation(&mut self) {
        self.pending = None;
    }

    /// Runs the confirmed action against the remote service.
    ///
    /// The pending request is cleared before anything else happens. The local
    /// list is mutated only after the remote call reports success; failures
    /// are surfaced as a transient notification and leave prior state intact.
    /// A confirmation arriving while another mutation is still in flight is
    /// dropped, not queued.
    #[instrument(skip(self), level = "debug")]
    pub async fn confirm(&mut self) {
        let Some(request) = self.pending.take() else {
            return;
        };
        if self.in_flight {
            debug!("trash operation already in flight, dropping confirmation");
            return;
        }
        self.in_flight = true;
        match request.action {
            PendingTrashAction::Restore { id } => self.run_restore(&id).await,
            PendingTrashAction::PermanentDelete { id } => self.run_permanent_delete(&id).await,
            PendingTrashAction::EmptyAll => self.run_empty_all().await,
        }
        self.in_flight = false;
    }

    async fn run_restore(&mut self, id: &str) {
        let result = self.service.restore_from_trash(id).await;
        if self.is_revoked() {
            return;
        }
        match result {
            Ok(()) => {
                self.state.bookmarks.retain(|b| b.id != id);
                self.notifier.success("Bookmark restored");
            }
            Err(e) => {
                error!("Failed to restore bookmark: {}", e);
                self.notifier
                    .error("Failed to restore the bookmark, please try again");
            }
        }
    }

    async fn run_permanent_delete(&mut self, id: &str) {
        let result = self.service.permanent_delete(id).await;
        if self.is_revoked() {
            return;
        }
        match result {
            Ok(()) => {
                self.state.bookmarks.retain(|b| b.id != id);
                self.notifier.success("Bookmark permanently deleted");
            }
            Err(e) => {
                error!("Failed to permanently delete bookmark: {}", e);
                self.notifier
                    .error("Failed to delete the bookmark, please try again");
            }
        }
    }

    async fn run_empty_all(&mut self) {
        let result = self.service.empty_trash().await;
        if self.is_revoked() {
            return;
        }
        match result {
            Ok(count) => {
                self.state.bookmarks.clear();
                self.notifier
                    .success(&format!("Trash emptied, {} bookmarks deleted", count));
            }
            Err(e) => {
                error!("Failed to empty trash: {}", e);
                self.notifier
                    .error("Failed to empty the trash, please try again");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fresh_state_when_phase_then_loading() {
        let state = TrashListState {
            bookmarks: Vec::new(),
            loading: true,
            error: None,
        };
        assert_eq!(state.phase(), TrashPhase::Loading);
    }

    #[test]
    fn given_error_when_phase_then_error_wins_over_list() {
        let state = TrashListState {
            bookmarks: Vec::new(),
            loading: false,
            error: Some("boom".to_string()),
        };
        assert_eq!(state.phase(), TrashPhase::Error);
    }

    #[test]
    fn given_settled_state_when_phase_then_split_on_list_content() {
        let empty = TrashListState {
            bookmarks: Vec::new(),
            loading: false,
            error: None,
        };
        assert_eq!(empty.phase(), TrashPhase::Empty);

        let populated = TrashListState {
            bookmarks: vec![Bookmark::from_remote(
                "b1".to_string(),
                "Example".to_string(),
                "https://example.com".to_string(),
                None,
                None,
            )],
            loading: false,
            error: None,
        };
        assert_eq!(populated.phase(), TrashPhase::NonEmpty);
    }
}
