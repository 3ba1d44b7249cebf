// src/application/services/mod.rs
pub mod action_bar;
pub mod notification;
pub mod trash_service;
pub mod trash_workflow;

pub use action_bar::ActionBarState;
pub use notification::NotificationService;
pub use trash_service::TrashService;
pub use trash_workflow::{TrashWorkflow, TRASH_PAGE_SIZE};
