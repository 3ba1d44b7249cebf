// src/infrastructure/notification.rs
use crossterm::style::Stylize;

use crate::application::services::notification::NotificationService;

/// Prints transient notifications to stderr so stdout stays pipeable.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("{}", message.to_string().green());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.to_string().red());
    }
}
