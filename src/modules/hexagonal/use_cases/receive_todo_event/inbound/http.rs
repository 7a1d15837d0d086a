// Receiving end of the remote event publisher.
//
// Accepts one wire event per request and logs it by type. Nothing is persisted.

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use tracing::{info, warn};

use crate::modules::hexagonal::core::wire_event::{EventType, TodoWireEvent};

pub async fn handle(body: Result<Json<TodoWireEvent>, JsonRejection>) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let event_type = match event.event_type() {
        Ok(event_type) => event_type,
        Err(err) => {
            warn!(event_id = ?event.event_id, error = %err, "rejected todo event");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    match event_type {
        EventType::Created => {
            info!(event_id = ?event.event_id, todo_id = ?event.todo_id, title = %event.title, "received todo created event")
        }
        EventType::Updated => {
            info!(event_id = ?event.event_id, todo_id = ?event.todo_id, title = %event.title, "received todo updated event")
        }
        EventType::Deleted => {
            info!(event_id = ?event.event_id, todo_id = ?event.todo_id, "received todo deleted event")
        }
        EventType::Completed => {
            info!(event_id = ?event.event_id, todo_id = ?event.todo_id, title = %event.title, "received todo completed event")
        }
    }

    StatusCode::OK.into_response()
}
