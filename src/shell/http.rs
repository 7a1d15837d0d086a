use axum::{Router, routing::post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::hexagonal::use_cases::manage_todos::inbound::http as hexagonal_http;
use crate::modules::hexagonal::use_cases::receive_todo_event::inbound::http as events_http;
use crate::modules::layered::controller as layered_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/hexagonal/todos", hexagonal_http::routes())
        .nest("/api/layered/todos", layered_http::routes())
        .route("/api/events", post(events_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
