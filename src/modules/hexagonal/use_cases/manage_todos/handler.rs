// Todo service orchestrates every todo use case.
//
// Responsibilities
// - Load the entity through the repository port and fail with NotFound when it is missing.
// - Let the entity apply the change, then persist it.
// - Hand the entity to the configured notification strategy after persisting.
//
// Notes
// - A persisted change is not rolled back when the strategy fails afterwards.

use crate::modules::hexagonal::core::ports::TodoRepository;
use crate::modules::hexagonal::core::todo::{Todo, TodoId};
use crate::modules::hexagonal::use_cases::manage_todos::command::{CreateTodo, UpdateTodo};
use crate::modules::hexagonal::use_cases::manage_todos::notification_strategy::NotificationStrategy;
use crate::modules::hexagonal::use_cases::manage_todos::use_case_port::{
    GetTodoQuery, ManageTodoUseCase,
};
use crate::shared::core::errors::{NotificationError, RepositoryError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("todo not found with id: {0}")]
    NotFound(TodoId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

pub struct TodoService<TRepository, TStrategy>
where
    TRepository: TodoRepository + 'static,
    TStrategy: NotificationStrategy + 'static,
{
    repository: Arc<TRepository>,
    strategy: Arc<TStrategy>,
}

impl<TRepository, TStrategy> TodoService<TRepository, TStrategy>
where
    TRepository: TodoRepository + 'static,
    TStrategy: NotificationStrategy + 'static,
{
    pub fn new(repository: Arc<TRepository>, strategy: Arc<TStrategy>) -> Self {
        Self {
            repository,
            strategy,
        }
    }

    async fn load(&self, id: TodoId) -> Result<Todo, ApplicationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))
    }
}

#[async_trait]
impl<TRepository, TStrategy> GetTodoQuery for TodoService<TRepository, TStrategy>
where
    TRepository: TodoRepository + 'static,
    TStrategy: NotificationStrategy + 'static,
{
    async fn get_all_todos(&self) -> Result<Vec<Todo>, ApplicationError> {
        Ok(self.repository.find_all().await?)
    }

    async fn get_todo_by_id(&self, id: TodoId) -> Result<Option<Todo>, ApplicationError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<TRepository, TStrategy> ManageTodoUseCase for TodoService<TRepository, TStrategy>
where
    TRepository: TodoRepository + 'static,
    TStrategy: NotificationStrategy + 'static,
{
    async fn create_todo(&self, command: CreateTodo) -> Result<Todo, ApplicationError> {
        let todo = Todo::create(command.title, command.description);
        let mut saved = self.repository.save(&todo).await?;
        info!(todo_id = ?saved.id(), "todo created");
        self.strategy.on_created(&mut saved).await;
        Ok(saved)
    }

    async fn update_todo(&self, id: TodoId, command: UpdateTodo) -> Result<Todo, ApplicationError> {
        let mut todo = self.load(id).await?;
        todo.update(command.title, command.description);
        let updated = self.repository.save(&todo).await?;
        info!(todo_id = id, "todo updated");
        self.strategy.on_updated(&mut todo).await;
        Ok(updated)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), ApplicationError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ApplicationError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(todo_id = id, "todo deleted");
        Ok(())
    }

    async fn complete_todo(&self, id: TodoId) -> Result<Todo, ApplicationError> {
        let mut todo = self.load(id).await?;
        todo.mark_as_completed();
        let updated = self.repository.save(&todo).await?;
        info!(todo_id = id, "todo completed");
        self.strategy.notify_on_completion(&mut todo).await?;
        Ok(updated)
    }
}
