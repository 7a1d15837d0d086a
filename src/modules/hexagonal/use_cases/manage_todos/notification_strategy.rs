// How the todo service tells the outside world about lifecycle changes.
//
// Purpose
// - Keep the service free of flags: the composition root picks one strategy.
//
// Strategies
// - DirectNotification calls the notification port inline. Its failure reaches the caller.
// - EventDrivenNotification drains the entity's domain events and hands them to a publisher.
//   Publish failures are logged here and never reach the caller.

use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::{EventPublisher, SendNotificationPort};
use crate::modules::hexagonal::core::todo::Todo;
use crate::shared::core::errors::NotificationError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[async_trait]
pub trait NotificationStrategy: Send + Sync {
    /// Runs after the first save, so the todo already carries its id.
    async fn on_created(&self, _todo: &mut Todo) {}

    async fn on_updated(&self, _todo: &mut Todo) {}

    async fn notify_on_completion(&self, todo: &mut Todo) -> Result<(), NotificationError>;
}

pub struct DirectNotification {
    port: Arc<dyn SendNotificationPort>,
}

impl DirectNotification {
    pub fn new(port: Arc<dyn SendNotificationPort>) -> Self {
        Self { port }
    }
}

#[async_trait]
impl NotificationStrategy for DirectNotification {
    async fn notify_on_completion(&self, todo: &mut Todo) -> Result<(), NotificationError> {
        let Some(todo_id) = todo.id() else {
            warn!(title = todo.title(), "completed todo has no id, notification skipped");
            return Ok(());
        };

        let acknowledged = self
            .port
            .send_completion_notification(todo_id, todo.title())
            .await?;
        if !acknowledged {
            warn!(todo_id, "notification service did not acknowledge the completion");
        }
        Ok(())
    }
}

pub struct EventDrivenNotification {
    publisher: Arc<dyn EventPublisher>,
}

impl EventDrivenNotification {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    async fn publish_pending(&self, todo: &mut Todo) {
        for event in todo.pull_domain_events() {
            let kind = event.kind();
            match self.publisher.publish(event).await {
                Ok(()) => debug!(todo_id = ?todo.id(), event = %kind, "domain event published"),
                Err(error) => {
                    error!(todo_id = ?todo.id(), event = %kind, %error, "failed to publish domain event")
                }
            }
        }
    }
}

#[async_trait]
impl NotificationStrategy for EventDrivenNotification {
    async fn on_created(&self, todo: &mut Todo) {
        let event = TodoDomainEvent::created(todo.id(), todo.title());
        todo.register_event(event);
        self.publish_pending(todo).await;
    }

    async fn on_updated(&self, todo: &mut Todo) {
        self.publish_pending(todo).await;
    }

    async fn notify_on_completion(&self, todo: &mut Todo) -> Result<(), NotificationError> {
        self.publish_pending(todo).await;
        Ok(())
    }
}
