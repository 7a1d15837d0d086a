use crate::modules::hexagonal::use_cases::manage_todos::use_case_port::{
    GetTodoQuery, ManageTodoUseCase,
};
use crate::modules::layered::service::LayeredTodoService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn GetTodoQuery + Send + Sync>,
    pub todos: Arc<dyn ManageTodoUseCase + Send + Sync>,
    pub layered: Arc<LayeredTodoService>,
}
