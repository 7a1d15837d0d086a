// In memory table keyed by an auto-increment id.
//
// Purpose
// - Back the todo repositories of both architectures without a database.
//
// Responsibilities
// - Assign ids on first insert, starting at 1.
// - Keep rows ordered by id.
// - Fail every call while toggled offline.

use crate::shared::core::errors::RepositoryError;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

pub type RowId = i64;

struct Rows<T> {
    by_id: BTreeMap<RowId, T>,
    next_id: RowId,
}

pub struct InMemoryTable<T: Clone + Send + Sync> {
    name: &'static str,
    rows: RwLock<Rows<T>>,
    writes: AtomicUsize,
    offline: bool,
}

impl<T: Clone + Send + Sync> InMemoryTable<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
            writes: AtomicUsize::new(0),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Number of successful inserts, updates and deletes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend(format!("{} offline", self.name)));
        }
        Ok(())
    }

    pub async fn all(&self) -> Result<Vec<T>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.by_id.values().cloned().collect())
    }

    pub async fn get(&self, id: RowId) -> Result<Option<T>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    pub async fn contains(&self, id: RowId) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.by_id.contains_key(&id))
    }

    /// Insert or overwrite a row. Rows without an id get the next one from the sequence;
    /// `build` receives the final id and returns the row to store.
    pub async fn save(
        &self,
        id: Option<RowId>,
        build: impl FnOnce(RowId) -> T + Send,
    ) -> Result<T, RepositoryError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let id = match id {
            Some(id) => id,
            None => rows.next_id,
        };
        rows.next_id = rows.next_id.max(id + 1);
        let row = build(id);
        rows.by_id.insert(id, row.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(row)
    }

    pub async fn remove(&self, id: RowId) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        let removed = self.rows.write().await.by_id.remove(&id).is_some();
        if removed {
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(removed)
    }
}
