// Todo entity of the hexagonal model.
//
// Purpose
// - Own the todo state and the rules that change it: update and completion.
// - Collect domain events raised by those rules until the application layer drains them.
//
// Boundaries
// - No input or output. Persistence and publishing happen through ports.
//
// Notes
// - The pending event buffer is not persisted and the entity is not `Clone`, so a buffer
//   always has exactly one owner. Draining swaps the buffer out in one step.
// - `completed` only ever goes from false to true.

use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::shared::core::clock;
use chrono::{DateTime, Utc};

pub type TodoId = i64;

#[derive(Debug)]
pub struct Todo {
    id: Option<TodoId>,
    title: String,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    pending_events: Vec<TodoDomainEvent>,
}

impl Todo {
    /// A fresh, not yet persisted todo.
    pub fn create(title: impl Into<String>, description: Option<String>) -> Self {
        let now = clock::now();
        Self {
            id: None,
            title: title.into(),
            description,
            completed: false,
            created_at: now,
            updated_at: now,
            pending_events: Vec::new(),
        }
    }

    /// Rebuild a todo from stored state. The event buffer starts empty.
    pub fn restore(
        id: TodoId,
        title: String,
        description: Option<String>,
        completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            description,
            completed,
            created_at,
            updated_at,
            pending_events: Vec::new(),
        }
    }

    pub fn update(&mut self, title: impl Into<String>, description: Option<String>) {
        self.title = title.into();
        self.description = description;
        self.updated_at = clock::advance(self.updated_at);
    }

    pub fn mark_as_completed(&mut self) {
        self.completed = true;
        self.updated_at = clock::advance(self.updated_at);
        let event = TodoDomainEvent::completed(self.id, self.title.clone());
        self.register_event(event);
    }

    pub fn register_event(&mut self, event: TodoDomainEvent) {
        self.pending_events.push(event);
    }

    /// Hand over every pending event in the order it was raised and leave the buffer empty.
    pub fn pull_domain_events(&mut self) -> Vec<TodoDomainEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn pending_events(&self) -> &[TodoDomainEvent] {
        &self.pending_events
    }

    pub fn id(&self) -> Option<TodoId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
