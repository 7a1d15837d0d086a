// Outbound adapter from the notification port to the external notification service.

use crate::modules::hexagonal::core::ports::SendNotificationPort;
use crate::modules::hexagonal::core::todo::TodoId;
use crate::shared::core::errors::NotificationError;
use crate::shared::infrastructure::external_notification::ExternalNotificationService;
use async_trait::async_trait;
use std::sync::Arc;

pub struct NotificationAdapter {
    service: Arc<ExternalNotificationService>,
}

impl NotificationAdapter {
    pub fn new(service: Arc<ExternalNotificationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SendNotificationPort for NotificationAdapter {
    async fn send_completion_notification(
        &self,
        todo_id: TodoId,
        title: &str,
    ) -> Result<bool, NotificationError> {
        self.service.send_completion_notification(todo_id, title).await
    }
}
