// Layered todo service.
//
// Notes
// - Depends on the concrete repository and the concrete notification service. There are no
//   ports and no domain events; every rule lives in this file.
// - Completion waits for the notification service and fails when it fails. The completed
//   record stays persisted.

use crate::modules::layered::model::{Todo, TodoDto, TodoRequest};
use crate::modules::layered::repository::LayeredTodoRepository;
use crate::shared::core::clock;
use crate::shared::core::errors::{NotificationError, RepositoryError};
use crate::shared::infrastructure::external_notification::ExternalNotificationService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum LayeredError {
    #[error("todo not found with id: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

pub struct LayeredTodoService {
    repository: Arc<LayeredTodoRepository>,
    notifications: Arc<ExternalNotificationService>,
}

impl LayeredTodoService {
    pub fn new(
        repository: Arc<LayeredTodoRepository>,
        notifications: Arc<ExternalNotificationService>,
    ) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    async fn load(&self, id: i64) -> Result<Todo, LayeredError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LayeredError::NotFound(id))
    }

    pub async fn get_all_todos(&self) -> Result<Vec<TodoDto>, LayeredError> {
        let todos = self.repository.find_all().await?;
        Ok(todos.into_iter().map(TodoDto::from).collect())
    }

    pub async fn get_todo_by_id(&self, id: i64) -> Result<TodoDto, LayeredError> {
        Ok(self.load(id).await?.into())
    }

    pub async fn create_todo(&self, request: TodoRequest) -> Result<TodoDto, LayeredError> {
        let now = clock::now();
        let todo = Todo {
            id: None,
            title: request.title,
            description: request.description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        let saved = self.repository.save(todo).await?;
        info!(todo_id = ?saved.id, "layered todo created");
        Ok(saved.into())
    }

    pub async fn update_todo(&self, id: i64, request: TodoRequest) -> Result<TodoDto, LayeredError> {
        let mut todo = self.load(id).await?;
        todo.title = request.title;
        todo.description = request.description;
        todo.updated_at = clock::advance(todo.updated_at);
        let updated = self.repository.save(todo).await?;
        info!(todo_id = id, "layered todo updated");
        Ok(updated.into())
    }

    pub async fn delete_todo(&self, id: i64) -> Result<(), LayeredError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(LayeredError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(todo_id = id, "layered todo deleted");
        Ok(())
    }

    pub async fn complete_todo(&self, id: i64) -> Result<TodoDto, LayeredError> {
        let mut todo = self.load(id).await?;
        todo.completed = true;
        todo.updated_at = clock::advance(todo.updated_at);
        let updated = self.repository.save(todo).await?;
        info!(todo_id = id, "layered todo completed");

        let acknowledged = self
            .notifications
            .send_completion_notification(id, &updated.title)
            .await?;
        if !acknowledged {
            warn!(todo_id = id, "notification service did not acknowledge the completion");
        }
        Ok(updated.into())
    }
}
