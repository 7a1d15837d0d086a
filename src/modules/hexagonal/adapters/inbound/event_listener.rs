// Subscriber that reacts to todo domain events inside the process.
//
// - TodoCompleted: ask the notification port to tell the external service.
// - TodoCreated: log only.

use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::{EventSubscriber, SendNotificationPort};
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub struct TodoEventListener {
    notifications: Arc<dyn SendNotificationPort>,
}

impl TodoEventListener {
    pub fn new(notifications: Arc<dyn SendNotificationPort>) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl EventSubscriber for TodoEventListener {
    fn name(&self) -> &str {
        "todo-event-listener"
    }

    async fn handle(&self, event: &TodoDomainEvent) -> anyhow::Result<()> {
        match event {
            TodoDomainEvent::TodoCreated(created) => {
                info!(todo_id = ?created.todo_id, title = %created.title, "todo created event received");
                Ok(())
            }
            TodoDomainEvent::TodoCompleted(completed) => {
                let todo_id = completed
                    .todo_id
                    .context("completed event carries no todo id")?;
                info!(todo_id, title = %completed.title, "todo completed event received, sending notification");
                let acknowledged = self
                    .notifications
                    .send_completion_notification(todo_id, &completed.title)
                    .await
                    .with_context(|| format!("completion notification for todo {todo_id} failed"))?;
                if !acknowledged {
                    warn!(todo_id, "notification service did not acknowledge the completion");
                }
                Ok(())
            }
        }
    }
}
