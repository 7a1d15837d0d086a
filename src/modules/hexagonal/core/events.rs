// Domain events raised by the todo entity.
//
// Purpose
// - Provide one closed type that publishers and subscribers pattern match on.
//
// Notes
// - Events are immutable once built. `occurred_at` is stamped at construction.
// - Adding a variant forces every match (wire conversion, listeners) to handle it.

use crate::modules::hexagonal::core::todo::TodoId;
use crate::shared::core::clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreated {
    pub todo_id: Option<TodoId>,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCompleted {
    pub todo_id: Option<TodoId>,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TodoDomainEvent {
    TodoCreated(TodoCreated),
    TodoCompleted(TodoCompleted),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoEventKind {
    Created,
    Completed,
}

impl fmt::Display for TodoEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoEventKind::Created => f.write_str("TodoCreated"),
            TodoEventKind::Completed => f.write_str("TodoCompleted"),
        }
    }
}

impl TodoDomainEvent {
    pub fn created(todo_id: Option<TodoId>, title: impl Into<String>) -> Self {
        TodoDomainEvent::TodoCreated(TodoCreated {
            todo_id,
            title: title.into(),
            occurred_at: clock::now(),
        })
    }

    pub fn completed(todo_id: Option<TodoId>, title: impl Into<String>) -> Self {
        TodoDomainEvent::TodoCompleted(TodoCompleted {
            todo_id,
            title: title.into(),
            occurred_at: clock::now(),
        })
    }

    pub fn kind(&self) -> TodoEventKind {
        match self {
            TodoDomainEvent::TodoCreated(_) => TodoEventKind::Created,
            TodoDomainEvent::TodoCompleted(_) => TodoEventKind::Completed,
        }
    }

    pub fn todo_id(&self) -> Option<TodoId> {
        match self {
            TodoDomainEvent::TodoCreated(e) => e.todo_id,
            TodoDomainEvent::TodoCompleted(e) => e.todo_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TodoDomainEvent::TodoCreated(e) => &e.title,
            TodoDomainEvent::TodoCompleted(e) => &e.title,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            TodoDomainEvent::TodoCreated(e) => e.occurred_at,
            TodoDomainEvent::TodoCompleted(e) => e.occurred_at,
        }
    }
}
