// Remote event publisher.
//
// Purpose
// - Send each todo domain event as one JSON POST to the remote events endpoint.
//
// Responsibilities
// - Convert domain events into wire events and assign an event id when absent.
// - Log non 2xx responses and transport failures. Neither reaches the caller.
//
// Notes
// - A completed event is sent with `completed: false`. Only todo id, title and the
//   occurrence time are copied from the domain event.

use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::{EventPublisher, PublishError};
use crate::modules::hexagonal::core::wire_event::{EventType, TodoWireEvent};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};
use uuid::Uuid;

pub fn to_wire_event(event: &TodoDomainEvent) -> TodoWireEvent {
    let event_type = match event {
        TodoDomainEvent::TodoCreated(_) => EventType::Created,
        TodoDomainEvent::TodoCompleted(_) => EventType::Completed,
    };
    TodoWireEvent {
        event_id: None,
        event_type: event_type.as_str().to_string(),
        todo_id: event.todo_id(),
        title: event.title().to_string(),
        description: None,
        completed: false,
        created_at: Some(event.occurred_at()),
        updated_at: None,
    }
}

pub struct RestEventPublisher {
    client: Client,
    events_url: String,
}

impl RestEventPublisher {
    pub fn new(events_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            events_url: events_url.into(),
        }
    }

    pub async fn publish_wire_event(&self, mut event: TodoWireEvent) {
        let event_id = event
            .event_id
            .get_or_insert_with(|| Uuid::now_v7().to_string())
            .clone();

        let response = self
            .client
            .post(&self.events_url)
            .json(&event)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                debug!(event_id = %event_id, event = %event.event_type, todo_id = ?event.todo_id, "event published to remote endpoint")
            }
            Ok(response) => warn!(
                event_id = %event_id,
                event = %event.event_type,
                status = response.status().as_u16(),
                "remote endpoint rejected event"
            ),
            Err(err) => error!(
                event_id = %event_id,
                event = %event.event_type,
                error = %err,
                "failed to send event to remote endpoint"
            ),
        }
    }
}

#[async_trait]
impl EventPublisher for RestEventPublisher {
    async fn publish(&self, event: TodoDomainEvent) -> Result<(), PublishError> {
        self.publish_wire_event(to_wire_event(&event)).await;
        Ok(())
    }
}
