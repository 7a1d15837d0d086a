use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use tracing::error;

use crate::modules::layered::model::TodoRequest;
use crate::modules::layered::service::LayeredError;
use crate::shell::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one).put(update).delete(delete))
        .route("/{id}/complete", patch(complete))
}

fn failure(err: LayeredError) -> Response {
    match err {
        LayeredError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        other => {
            error!(error = %other, "layered todo request failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.layered.get_all_todos().await {
        Ok(todos) => Json(todos).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.layered.get_todo_by_id(id).await {
        Ok(todo) => Json(todo).into_response(),
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

    match state.layered.create_todo(body).await {
        Ok(todo) => (StatusCode::CREATED, Json(todo)).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<TodoRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.layered.update_todo(id, body).await {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => failure(err),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.layered.delete_todo(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => failure(err),
    }
}

pub async fn complete(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.layered.complete_todo(id).await {
        Ok(todo) => Json(todo).into_response(),
        Err(err) => failure(err),
    }
}
