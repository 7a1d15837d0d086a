use crate::modules::layered::model::Todo;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory_table::InMemoryTable;

pub struct LayeredTodoRepository {
    table: InMemoryTable<Todo>,
}

impl Default for LayeredTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredTodoRepository {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new("Layered todo repository"),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.table.toggle_offline();
    }

    pub fn write_count(&self) -> usize {
        self.table.write_count()
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        self.table.all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, RepositoryError> {
        self.table.get(id).await
    }

    /// Stores the record and returns it with its id filled in.
    pub async fn save(&self, todo: Todo) -> Result<Todo, RepositoryError> {
        let id = todo.id;
        self.table
            .save(id, move |id| Todo {
                id: Some(id),
                ..todo
            })
            .await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        self.table.remove(id).await?;
        Ok(())
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        self.table.contains(id).await
    }
}
