// In memory implementation of the todo repository port.
//
// Notes
// - Stores plain rows. Pending domain events never reach storage; loaded todos start with
//   an empty buffer.

use crate::modules::hexagonal::core::ports::TodoRepository;
use crate::modules::hexagonal::core::todo::{Todo, TodoId};
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory_table::InMemoryTable;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
struct TodoRow {
    id: TodoId,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::restore(
            row.id,
            row.title,
            row.description,
            row.completed,
            row.created_at,
            row.updated_at,
        )
    }
}

pub struct InMemoryTodoRepository {
    table: InMemoryTable<TodoRow>,
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new("Todo repository"),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.table.toggle_offline();
    }

    pub fn write_count(&self) -> usize {
        self.table.write_count()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        Ok(self.table.all().await?.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        Ok(self.table.get(id).await?.map(Todo::from))
    }

    async fn save(&self, todo: &Todo) -> Result<Todo, RepositoryError> {
        let title = todo.title().to_string();
        let description = todo.description().map(str::to_string);
        let completed = todo.is_completed();
        let created_at = todo.created_at();
        let updated_at = todo.updated_at();

        let row = self
            .table
            .save(todo.id(), move |id| TodoRow {
                id,
                title,
                description,
                completed,
                created_at,
                updated_at,
            })
            .await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), RepositoryError> {
        self.table.remove(id).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: TodoId) -> Result<bool, RepositoryError> {
        self.table.contains(id).await
    }
}
