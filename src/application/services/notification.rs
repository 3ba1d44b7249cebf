// src/application/services/notification.rs
use std::fmt::Debug;

/// User-facing transient notifications (the toast surface of the web client).
///
/// Injected rather than ambient so tests can substitute a recorder.
pub trait NotificationService: Send + Sync + Debug {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
