// In process event bus.
//
// Purpose
// - Deliver todo domain events to subscribers without making the publisher wait.
//
// Responsibilities
// - One unbounded lane and one worker task per subscriber. A lane handles its events in
//   publish order.
// - Each handler call runs in its own task, so an error or a panic is logged inside the lane
//   and the lane keeps going.
//
// Boundaries
// - `publish` only enqueues. It fails when a lane worker has stopped, never because a
//   subscriber failed.
// - Must be constructed inside a tokio runtime.

use crate::modules::hexagonal::core::events::TodoDomainEvent;
use crate::modules::hexagonal::core::ports::{EventPublisher, EventSubscriber, PublishError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct Lane {
    subscriber: Arc<dyn EventSubscriber>,
    sender: mpsc::UnboundedSender<Arc<TodoDomainEvent>>,
}

pub struct InProcessEventBus {
    lanes: Vec<Lane>,
}

impl InProcessEventBus {
    pub fn new(subscribers: Vec<Arc<dyn EventSubscriber>>) -> Self {
        let lanes = subscribers
            .into_iter()
            .map(|subscriber| {
                let (sender, receiver) = mpsc::unbounded_channel();
                tokio::spawn(run_lane(subscriber.clone(), receiver));
                Lane { subscriber, sender }
            })
            .collect();
        Self { lanes }
    }
}

async fn run_lane(
    subscriber: Arc<dyn EventSubscriber>,
    mut receiver: mpsc::UnboundedReceiver<Arc<TodoDomainEvent>>,
) {
    while let Some(event) = receiver.recv().await {
        let kind = event.kind();
        let handler = subscriber.clone();
        let outcome = tokio::spawn(async move { handler.handle(&event).await }).await;

        match outcome {
            Ok(Ok(())) => debug!(subscriber = subscriber.name(), event = %kind, "event handled"),
            Ok(Err(err)) => {
                error!(subscriber = subscriber.name(), event = %kind, error = %format!("{err:#}"), "subscriber failed to handle event")
            }
            Err(join_error) => {
                error!(subscriber = subscriber.name(), event = %kind, error = %join_error, "subscriber panicked while handling event")
            }
        }
    }
    debug!(subscriber = subscriber.name(), "event lane closed");
}

#[async_trait]
impl EventPublisher for InProcessEventBus {
    async fn publish(&self, event: TodoDomainEvent) -> Result<(), PublishError> {
        let kind = event.kind();
        let event = Arc::new(event);
        let mut closed = None;

        for lane in self.lanes.iter().filter(|lane| lane.subscriber.accepts(kind)) {
            if lane.sender.send(event.clone()).is_err() {
                warn!(subscriber = lane.subscriber.name(), event = %kind, "event lane is closed");
                if closed.is_none() {
                    closed = Some(lane.subscriber.name().to_string());
                }
            }
        }

        match closed {
            Some(subscriber) => Err(PublishError::LaneClosed { subscriber }),
            None => Ok(()),
        }
    }
}
