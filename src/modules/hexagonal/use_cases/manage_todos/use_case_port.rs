use crate::modules::hexagonal::core::todo::{Todo, TodoId};
use crate::modules::hexagonal::use_cases::manage_todos::command::{CreateTodo, UpdateTodo};
use crate::modules::hexagonal::use_cases::manage_todos::handler::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait GetTodoQuery {
    async fn get_all_todos(&self) -> Result<Vec<Todo>, ApplicationError>;
    async fn get_todo_by_id(&self, id: TodoId) -> Result<Option<Todo>, ApplicationError>;
}

#[async_trait]
pub trait ManageTodoUseCase {
    async fn create_todo(&self, command: CreateTodo) -> Result<Todo, ApplicationError>;
    async fn update_todo(&self, id: TodoId, command: UpdateTodo) -> Result<Todo, ApplicationError>;
    async fn delete_todo(&self, id: TodoId) -> Result<(), ApplicationError>;
    async fn complete_todo(&self, id: TodoId) -> Result<Todo, ApplicationError>;
}
