// src/util/testing.rs

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::notification::NotificationService;
use crate::application::services::trash_service::TrashService;
use crate::domain::bookmark::Bookmark;

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is
/// already set.
pub fn init_test_env() {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

/// Restores the tmarks environment variables on drop so env-mutating tests
/// cannot leak into each other.
pub struct EnvGuard {
    api_url: Option<String>,
    api_token: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            api_url: env::var("TMARKS_API_URL").ok(),
            api_token: env::var("TMARKS_API_TOKEN").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("TMARKS_API_URL");
        env::remove_var("TMARKS_API_TOKEN");
        if let Some(val) = &self.api_url {
            env::set_var("TMARKS_API_URL", val);
        }
        if let Some(val) = &self.api_token {
            env::set_var("TMARKS_API_TOKEN", val);
        }
    }
}

/// Builds a bookmark the way the server would hand it back from the trash.
pub fn trashed_bookmark(id: &str, title: &str) -> Bookmark {
    Bookmark::from_remote(
        id.to_string(),
        title.to_string(),
        format!("https://{}.example.com", id),
        None,
        Some(Utc::now()),
    )
}

/// In-memory stand-in for the remote trash boundary.
///
/// Records every call in order and can be switched into failure modes, so
/// tests can assert both what was sent and how failures surface.
#[derive(Debug, Default)]
pub struct MockTrashService {
    trash: Mutex<Vec<Bookmark>>,
    fail_fetch: AtomicBool,
    fail_mutations: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockTrashService {
    pub fn with_trash(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            trash: Mutex::new(bookmarks),
            ..Self::default()
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    /// Calls seen so far, e.g. `["fetch_trash:100", "restore:b1"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remaining_trash(&self) -> Vec<Bookmark> {
        self.trash.lock().unwrap().clone()
    }

    fn record<S: Into<String>>(&self, call: S) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl TrashService for MockTrashService {
    async fn fetch_trash(&self, page_size: usize) -> ApplicationResult<Vec<Bookmark>> {
        self.record(format!("fetch_trash:{}", page_size));
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ApplicationError::Other("simulated fetch failure".into()));
        }
        let trash = self.trash.lock().unwrap();
        Ok(trash.iter().take(page_size).cloned().collect())
    }

    async fn restore_from_trash(&self, id: &str) -> ApplicationResult<()> {
        self.record(format!("restore:{}", id));
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApplicationError::Other("simulated restore failure".into()));
        }
        self.trash.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn permanent_delete(&self, id: &str) -> ApplicationResult<()> {
        self.record(format!("permanent_delete:{}", id));
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApplicationError::Other("simulated delete failure".into()));
        }
        self.trash.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn empty_trash(&self) -> ApplicationResult<usize> {
        self.record("empty_trash");
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(ApplicationError::Other("simulated empty failure".into()));
        }
        let mut trash = self.trash.lock().unwrap();
        let count = trash.len();
        trash.clear();
        Ok(count)
    }
}

/// Captures notifications instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| *ok)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(ok, _)| !*ok)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl NotificationService for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push((true, message.into()));
    }

    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push((false, message.into()));
    }
}
