// Composition root.
//
// Responsibilities
// - Instantiate the in memory repositories and the simulated notification service.
// - Pick the notification strategy and, for the event driven one, the publisher.
// - Wire both architectures into one AppState.
//
// Notes
// - `compose` spawns the in process bus workers, so it must run inside a tokio runtime.

pub mod config;
pub mod http;
pub mod state;

use crate::modules::hexagonal::adapters::inbound::event_listener::TodoEventListener;
use crate::modules::hexagonal::adapters::outbound::event_bus_in_process::InProcessEventBus;
use crate::modules::hexagonal::adapters::outbound::event_publisher_rest::RestEventPublisher;
use crate::modules::hexagonal::adapters::outbound::notification::NotificationAdapter;
use crate::modules::hexagonal::adapters::outbound::persistence_in_memory::InMemoryTodoRepository;
use crate::modules::hexagonal::core::ports::{EventPublisher, SendNotificationPort};
use crate::modules::hexagonal::use_cases::manage_todos::handler::TodoService;
use crate::modules::hexagonal::use_cases::manage_todos::notification_strategy::{
    DirectNotification, EventDrivenNotification, NotificationStrategy,
};
use crate::modules::layered::repository::LayeredTodoRepository;
use crate::modules::layered::service::LayeredTodoService;
use crate::shared::infrastructure::external_notification::ExternalNotificationService;
use config::{CompletionStrategy, Config, PublisherKind};
use state::AppState;
use std::sync::Arc;
use tracing::info;

pub fn compose(config: &Config) -> AppState {
    let notification_service = Arc::new(ExternalNotificationService::new(
        config.notification_delay,
    ));
    let layered = Arc::new(LayeredTodoService::new(
        Arc::new(LayeredTodoRepository::new()),
        notification_service.clone(),
    ));

    let repository = Arc::new(InMemoryTodoRepository::new());
    let notifications: Arc<dyn SendNotificationPort> =
        Arc::new(NotificationAdapter::new(notification_service));

    match config.completion_strategy {
        CompletionStrategy::Direct => {
            info!("hexagonal todos notify directly on completion");
            with_strategy(repository, DirectNotification::new(notifications), layered)
        }
        CompletionStrategy::Events => {
            let publisher: Arc<dyn EventPublisher> = match config.event_publisher {
                PublisherKind::InProcess => {
                    info!("hexagonal todos publish events on the in process bus");
                    Arc::new(InProcessEventBus::new(vec![Arc::new(
                        TodoEventListener::new(notifications),
                    )]))
                }
                PublisherKind::Rest => {
                    let events_url = config.events_url();
                    info!(events_url = %events_url, "hexagonal todos publish events over http");
                    Arc::new(RestEventPublisher::new(events_url))
                }
            };
            with_strategy(repository, EventDrivenNotification::new(publisher), layered)
        }
    }
}

fn with_strategy<TStrategy>(
    repository: Arc<InMemoryTodoRepository>,
    strategy: TStrategy,
    layered: Arc<LayeredTodoService>,
) -> AppState
where
    TStrategy: NotificationStrategy + 'static,
{
    let service = Arc::new(TodoService::new(repository, Arc::new(strategy)));
    AppState {
        queries: service.clone(),
        todos: service,
        layered,
    }
}
