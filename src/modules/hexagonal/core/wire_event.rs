// Transport representation of a todo event.
//
// Purpose
// - The JSON body exchanged with the remote events endpoint.
//
// Notes
// - `eventType` travels as a plain string. UPDATED and DELETED are reserved: no todo
//   operation raises them yet, but receivers must accept them.

use crate::modules::hexagonal::core::todo::TodoId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Created,
    Updated,
    Deleted,
    Completed,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Created => "CREATED",
            EventType::Updated => "UPDATED",
            EventType::Deleted => "DELETED",
            EventType::Completed => "COMPLETED",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WireEventError {
    #[error("unsupported event type: {0}")]
    InvalidEventVariant(String),
}

impl FromStr for EventType {
    type Err = WireEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(EventType::Created),
            "UPDATED" => Ok(EventType::Updated),
            "DELETED" => Ok(EventType::Deleted),
            "COMPLETED" => Ok(EventType::Completed),
            other => Err(WireEventError::InvalidEventVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoWireEvent {
    #[serde(default)]
    pub event_id: Option<String>,
    pub event_type: String,
    #[serde(default)]
    pub todo_id: Option<TodoId>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TodoWireEvent {
    pub fn event_type(&self) -> Result<EventType, WireEventError> {
        self.event_type.parse()
    }
}
