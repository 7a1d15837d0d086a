// Simulated external notification service.
//
// Purpose
// - Stand in for a remote API that is told when a todo has been completed.
//
// Responsibilities
// - Hold the caller for a fixed delay, like a slow network call would.
// - Record each delivered notification so tests and demos can inspect them.
// - Fail every call while toggled offline.

use crate::shared::core::errors::NotificationError;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredNotification {
    pub todo_id: i64,
    pub title: String,
}

pub struct ExternalNotificationService {
    delay: Duration,
    offline: bool,
    delivered: Mutex<Vec<DeliveredNotification>>,
}

impl Default for ExternalNotificationService {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DELAY)
    }
}

impl ExternalNotificationService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            offline: false,
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn send_completion_notification(
        &self,
        todo_id: i64,
        title: &str,
    ) -> Result<bool, NotificationError> {
        if self.offline {
            warn!(todo_id, title, "external notification service is offline");
            return Err(NotificationError::Unavailable(
                "External notification service offline".into(),
            ));
        }

        info!(todo_id, title, "calling external notification service: todo completed");
        tokio::time::sleep(self.delay).await;

        self.delivered.lock().await.push(DeliveredNotification {
            todo_id,
            title: title.to_string(),
        });
        Ok(true)
    }

    pub async fn delivered(&self) -> Vec<DeliveredNotification> {
        self.delivered.lock().await.clone()
    }
}
