// Ports define what the todo core needs from the outside world, without implementing it.
//
// Purpose
// - Describe persistence, notification and event publishing as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide in memory or recording implementations for tests and local development.

use crate::modules::hexagonal::core::events::{TodoDomainEvent, TodoEventKind};
use crate::modules::hexagonal::core::todo::{Todo, TodoId};
use crate::shared::core::errors::{NotificationError, RepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[async_trait]
pub trait TodoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError>;
    /// Persist the todo and return the stored representation. Assigns an id on first save.
    async fn save(&self, todo: &Todo) -> Result<Todo, RepositoryError>;
    async fn delete_by_id(&self, id: TodoId) -> Result<(), RepositoryError>;
    async fn exists_by_id(&self, id: TodoId) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait SendNotificationPort: Send + Sync {
    async fn send_completion_notification(
        &self,
        todo_id: TodoId,
        title: &str,
    ) -> Result<bool, NotificationError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("subscriber lane {subscriber} is closed")]
    LaneClosed { subscriber: String },

    #[error("publish failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: TodoDomainEvent) -> Result<(), PublishError>;
}

/// In-process consumer of todo domain events.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    fn name(&self) -> &str;

    fn accepts(&self, _kind: TodoEventKind) -> bool {
        true
    }

    async fn handle(&self, event: &TodoDomainEvent) -> anyhow::Result<()>;
}
