use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification service unavailable: {0}")]
    Unavailable(String),
}
