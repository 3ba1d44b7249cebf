// src/application/services/trash_service.rs
use async_trait::async_trait;
use std::fmt::Debug;

use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;

/// Remote boundary for trash operations.
///
/// The bookmark service owns all persistent state; every method suspends at
/// the network call and may fail with a loggable cause. No structured error
/// payload is assumed beyond that.
#[async_trait]
pub trait TrashService: Send + Sync + Debug {
    /// Fetch up to `page_size` soft-deleted bookmarks, server order preserved.
    async fn fetch_trash(&self, page_size: usize) -> ApplicationResult<Vec<Bookmark>>;

    /// Move a trashed bookmark back into the live collection.
    async fn restore_from_trash(&self, id: &str) -> ApplicationResult<()>;

    /// Irreversibly delete a single trashed bookmark.
    async fn permanent_delete(&self, id: &str) -> ApplicationResult<()>;

    /// Irreversibly delete everything in the trash; returns the deleted count.
    async fn empty_trash(&self) -> ApplicationResult<usize>;
}
