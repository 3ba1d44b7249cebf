// src/infrastructure/di/service_container.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::notification::NotificationService;
use crate::application::services::trash_service::TrashService;
use crate::application::services::trash_workflow::TrashWorkflow;
use crate::config::Settings;
use crate::infrastructure::http::HttpTrashService;
use crate::infrastructure::notification::TerminalNotifier;

/// Production service container - single composition root for service creation.
pub struct ServiceContainer {
    pub trash_service: Arc<dyn TrashService>,
    pub notification_service: Arc<dyn NotificationService>,
}

impl ServiceContainer {
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let trash_service: Arc<dyn TrashService> = Arc::new(HttpTrashService::new(settings)?);
        let notification_service: Arc<dyn NotificationService> = Arc::new(TerminalNotifier::new());

        Ok(Self {
            trash_service,
            notification_service,
        })
    }

    /// A fresh workflow bound to the container's services, one per command.
    pub fn trash_workflow(&self) -> TrashWorkflow {
        TrashWorkflow::new(
            Arc::clone(&self.trash_service),
            Arc::clone(&self.notification_service),
        )
    }
}
