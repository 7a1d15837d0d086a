use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::hexagonal::core::todo::{Todo, TodoId};
use crate::modules::hexagonal::use_cases::manage_todos::command::{CreateTodo, UpdateTodo};
use crate::modules::hexagonal::use_cases::manage_todos::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Option<TodoId>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            description: todo.description().map(str::to_string),
            completed: todo.is_completed(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
        .route("/{id}/complete", patch(complete))
}

fn failure(err: ApplicationError) -> Response {
    match err {
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        other => {
            error!(error = %other, "todo request failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.get_all_todos().await {
        Ok(todos) => {
            Json(todos.iter().map(TodoResponse::from).collect::<Vec<_>>()).into_response()
        }
        Err(err) => failure(err),
    }
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<TodoId>) -> impl IntoResponse {
    match state.queries.get_todo_by_id(id).await {
        Ok(Some(todo)) => Json(TodoResponse::from(&todo)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => failure(err),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateTodo {
        title: body.title,
        description: body.description,
    };

    match state.todos.create_todo(command).await {
        Ok(todo) => (StatusCode::CREATED, Json(TodoResponse::from(&todo))).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTodo {
        title: body.title,
        description: body.description,
    };

    match state.todos.update_todo(id, command).await {
        Ok(todo) => Json(TodoResponse::from(&todo)).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<TodoId>) -> impl IntoResponse {
    match state.todos.delete_todo(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => failure(err),
    }
}

pub async fn complete(State(state): State<AppState>, Path(id): Path<TodoId>) -> impl IntoResponse {
    match state.todos.complete_todo(id).await {
        Ok(todo) => Json(TodoResponse::from(&todo)).into_response(),
        Err(err) => failure(err),
    }
}
