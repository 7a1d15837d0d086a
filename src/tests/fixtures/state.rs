use crate::modules::hexagonal::adapters::outbound::persistence_in_memory::InMemoryTodoRepository;
use crate::modules::hexagonal::use_cases::manage_todos::handler::TodoService;
use crate::modules::hexagonal::use_cases::manage_todos::notification_strategy::EventDrivenNotification;
use crate::modules::layered::repository::LayeredTodoRepository;
use crate::modules::layered::service::LayeredTodoService;
use crate::shared::infrastructure::external_notification::ExternalNotificationService;
use crate::shell::state::AppState;
use crate::tests::fixtures::publishers::RecordingPublisher;
use std::sync::Arc;
use std::time::Duration;

fn build_state(
    repository: InMemoryTodoRepository,
    layered_repository: LayeredTodoRepository,
) -> AppState {
    let strategy = Arc::new(EventDrivenNotification::new(Arc::new(
        RecordingPublisher::default(),
    )));
    let service = Arc::new(TodoService::new(Arc::new(repository), strategy));
    let layered = Arc::new(LayeredTodoService::new(
        Arc::new(layered_repository),
        Arc::new(ExternalNotificationService::new(Duration::ZERO)),
    ));
    AppState {
        queries: service.clone(),
        todos: service,
        layered,
    }
}

pub fn make_test_state() -> AppState {
    build_state(InMemoryTodoRepository::new(), LayeredTodoRepository::new())
}

/// Both repositories fail every call.
pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryTodoRepository::new();
    repository.toggle_offline();
    let mut layered_repository = LayeredTodoRepository::new();
    layered_repository.toggle_offline();
    build_state(repository, layered_repository)
}
