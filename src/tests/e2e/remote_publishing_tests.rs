use crate::modules::hexagonal::adapters::outbound::event_publisher_rest::RestEventPublisher;
use crate::modules::hexagonal::adapters::outbound::persistence_in_memory::InMemoryTodoRepository;
use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::EventPublisher;
use crate::modules::hexagonal::use_cases::manage_todos::command::CreateTodo;
use crate::modules::hexagonal::use_cases::manage_todos::handler::TodoService;
use crate::modules::hexagonal::use_cases::manage_todos::notification_strategy::EventDrivenNotification;
use crate::modules::hexagonal::use_cases::manage_todos::use_case_port::ManageTodoUseCase;
use crate::shell::config::{CompletionStrategy, Config, PublisherKind};
use crate::shell::{compose, http::router};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

type Received = Arc<Mutex<Vec<serde_json::Value>>>;

async fn record(State(received): State<Received>, Json(body): Json<serde_json::Value>) -> StatusCode {
    received.lock().await.push(body);
    StatusCode::OK
}

async fn spawn_recording_endpoint() -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/events", post(record))
        .with_state(received.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api/events"), received)
}

#[tokio::test]
async fn sends_a_created_event_as_a_wire_payload() {
    let (url, received) = spawn_recording_endpoint().await;
    let publisher = RestEventPublisher::new(url);

    publisher
        .publish(TodoDomainEvent::created(Some(5), "X"))
        .await
        .unwrap();

    let bodies = received.lock().await.clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["eventType"], "CREATED");
    assert_eq!(bodies[0]["todoId"], 5);
    assert_eq!(bodies[0]["title"], "X");
    assert!(bodies[0]["eventId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn publishes_created_then_completed_for_a_todo_lifecycle() {
    let (url, received) = spawn_recording_endpoint().await;
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(EventDrivenNotification::new(Arc::new(
            RestEventPublisher::new(url),
        ))),
    );

    service
        .create_todo(CreateTodo {
            title: "Test Todo".into(),
            description: None,
        })
        .await
        .unwrap();
    service.complete_todo(1).await.unwrap();

    let types: Vec<_> = received
        .lock()
        .await
        .iter()
        .map(|body| body["eventType"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(types, vec!["CREATED", "COMPLETED"]);
}

#[tokio::test]
async fn completes_through_a_server_that_receives_its_own_events() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = Config {
        bind_addr: addr,
        completion_strategy: CompletionStrategy::Events,
        event_publisher: PublisherKind::Rest,
        notification_service_url: format!("http://{addr}"),
        notification_delay: Duration::ZERO,
        ..Config::default()
    };
    let app = router(compose(&config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let created = client
        .post(format!("http://{addr}/api/hexagonal/todos"))
        .json(&serde_json::json!({"title": "Loop"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);

    let completed = client
        .patch(format!("http://{addr}/api/hexagonal/todos/1/complete"))
        .send()
        .await
        .unwrap();
    assert_eq!(completed.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = completed.json().await.unwrap();
    assert_eq!(body["completed"], true);
}
