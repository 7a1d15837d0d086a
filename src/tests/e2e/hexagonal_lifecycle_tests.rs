use crate::modules::hexagonal::adapters::inbound::event_listener::TodoEventListener;
use crate::modules::hexagonal::adapters::outbound::event_bus_in_process::InProcessEventBus;
use crate::modules::hexagonal::adapters::outbound::notification::NotificationAdapter;
use crate::modules::hexagonal::adapters::outbound::persistence_in_memory::InMemoryTodoRepository;
use crate::modules::hexagonal::core::events::TodoEventKind;
use crate::modules::hexagonal::use_cases::manage_todos::command::CreateTodo;
use crate::modules::hexagonal::use_cases::manage_todos::handler::TodoService;
use crate::modules::hexagonal::use_cases::manage_todos::inbound::http::TodoResponse;
use crate::modules::hexagonal::use_cases::manage_todos::notification_strategy::{
    DirectNotification, EventDrivenNotification, NotificationStrategy,
};
use crate::modules::hexagonal::use_cases::manage_todos::use_case_port::ManageTodoUseCase;
use crate::modules::layered::repository::LayeredTodoRepository;
use crate::modules::layered::service::LayeredTodoService;
use crate::shared::infrastructure::external_notification::{
    DeliveredNotification, ExternalNotificationService,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::publishers::RecordingPublisher;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;

fn state_with<TStrategy: NotificationStrategy + 'static>(strategy: TStrategy) -> AppState {
    let service = Arc::new(TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(strategy),
    ));
    AppState {
        queries: service.clone(),
        todos: service,
        layered: Arc::new(LayeredTodoService::new(
            Arc::new(LayeredTodoRepository::new()),
            Arc::new(ExternalNotificationService::new(Duration::ZERO)),
        )),
    }
}

async fn read_todo(response: axum::response::Response) -> TodoResponse {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn creates_and_completes_a_todo_dispatching_one_completed_event() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = router(state_with(EventDrivenNotification::new(publisher.clone())));

    let created = app
        .clone()
        .oneshot(
            Request::post("/api/hexagonal/todos")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"Test","description":"D"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = read_todo(created).await;
    let id = created.id.expect("generated id");
    assert!(!created.completed);
    assert_eq!(created.created_at, created.updated_at);

    let completed = app
        .oneshot(
            Request::patch(format!("/api/hexagonal/todos/{id}/complete"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(completed.status(), StatusCode::OK);
    let completed = read_todo(completed).await;
    assert!(completed.completed);
    assert!(completed.updated_at > created.updated_at);

    let completions: Vec<_> = publisher
        .events()
        .await
        .into_iter()
        .filter(|event| event.kind() == TodoEventKind::Completed)
        .collect();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].todo_id(), Some(id));
}

#[tokio::test]
async fn deleting_an_unknown_todo_answers_404_without_dispatching() {
    let publisher = Arc::new(RecordingPublisher::default());
    let app = router(state_with(EventDrivenNotification::new(publisher.clone())));

    let response = app
        .oneshot(
            Request::delete("/api/hexagonal/todos/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(publisher.events().await.is_empty());
}

#[tokio::test]
async fn in_process_bus_notifies_the_external_service_after_completion_returns() {
    let notifications = Arc::new(ExternalNotificationService::new(Duration::from_millis(50)));
    let listener = TodoEventListener::new(Arc::new(NotificationAdapter::new(
        notifications.clone(),
    )));
    let bus = Arc::new(InProcessEventBus::new(vec![Arc::new(listener)]));
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(EventDrivenNotification::new(bus)),
    );
    service
        .create_todo(CreateTodo {
            title: "Buy milk".into(),
            description: None,
        })
        .await
        .unwrap();

    let completed = service.complete_todo(1).await.unwrap();
    assert!(completed.is_completed());
    assert!(notifications.delivered().await.is_empty());

    let deadline = Instant::now() + Duration::from_secs(2);
    while notifications.delivered().await.is_empty() && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(
        notifications.delivered().await,
        vec![DeliveredNotification {
            todo_id: 1,
            title: "Buy milk".into()
        }]
    );
}

#[tokio::test]
async fn direct_strategy_waits_for_the_notification_service() {
    let notifications = Arc::new(ExternalNotificationService::new(Duration::from_millis(100)));
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DirectNotification::new(Arc::new(NotificationAdapter::new(
            notifications.clone(),
        )))),
    );
    service
        .create_todo(CreateTodo {
            title: "Buy milk".into(),
            description: None,
        })
        .await
        .unwrap();

    let started = Instant::now();
    service.complete_todo(1).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(notifications.delivered().await.len(), 1);
}

#[tokio::test]
async fn direct_strategy_failure_surfaces_as_500() {
    let mut notifications = ExternalNotificationService::new(Duration::ZERO);
    notifications.toggle_offline();
    let app = router(state_with(DirectNotification::new(Arc::new(
        NotificationAdapter::new(Arc::new(notifications)),
    ))));

    app.clone()
        .oneshot(
            Request::post("/api/hexagonal/todos")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"Buy milk"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let completed = app
        .clone()
        .oneshot(
            Request::patch("/api/hexagonal/todos/1/complete")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(completed.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let fetched = app
        .oneshot(
            Request::get("/api/hexagonal/todos/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(read_todo(fetched).await.completed);
}
