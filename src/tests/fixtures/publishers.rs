use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::{EventPublisher, PublishError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<TodoDomainEvent>>,
}

impl RecordingPublisher {
    pub async fn events(&self) -> Vec<TodoDomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: TodoDomainEvent) -> Result<(), PublishError> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

#[derive(Default)]
pub struct FailingPublisher {
    attempts: AtomicUsize,
}

impl FailingPublisher {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: TodoDomainEvent) -> Result<(), PublishError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PublishError::Failed("publisher down".into()))
    }
}
