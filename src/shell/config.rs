// Runtime configuration read from environment variables.
//
// Variables
// - TODO_BIND_ADDR                 listen address, default 0.0.0.0:8080
// - TODO_COMPLETION_STRATEGY       events | direct, default events
// - TODO_EVENT_PUBLISHER           in_process | rest, default in_process
// - TODO_NOTIFICATION_SERVICE_URL  base url of the events receiver, default http://localhost:8080
// - TODO_EVENTS_ENDPOINT           path of the events receiver, default /api/events
// - TODO_NOTIFICATION_DELAY_MS     simulated notification latency, default 100

use crate::shared::infrastructure::external_notification::DEFAULT_NOTIFICATION_DELAY;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which notification strategy the hexagonal service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStrategy {
    Direct,
    Events,
}

impl FromStr for CompletionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(CompletionStrategy::Direct),
            "events" => Ok(CompletionStrategy::Events),
            _ => Err("expected one of: direct, events".into()),
        }
    }
}

/// Where domain events go when the event driven strategy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublisherKind {
    InProcess,
    Rest,
}

impl FromStr for PublisherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in_process" => Ok(PublisherKind::InProcess),
            "rest" => Ok(PublisherKind::Rest),
            _ => Err("expected one of: in_process, rest".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub completion_strategy: CompletionStrategy,
    pub event_publisher: PublisherKind,
    pub notification_service_url: String,
    pub events_endpoint: String,
    pub notification_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            completion_strategy: CompletionStrategy::Events,
            event_publisher: PublisherKind::InProcess,
            notification_service_url: "http://localhost:8080".into(),
            events_endpoint: "/api/events".into(),
            notification_delay: DEFAULT_NOTIFICATION_DELAY,
        }
    }
}

fn parse<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            key,
            reason: err.to_string(),
            value,
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let delay_ms = parse(
            "TODO_NOTIFICATION_DELAY_MS",
            lookup("TODO_NOTIFICATION_DELAY_MS"),
            defaults.notification_delay.as_millis() as u64,
        )?;

        Ok(Self {
            bind_addr: parse("TODO_BIND_ADDR", lookup("TODO_BIND_ADDR"), defaults.bind_addr)?,
            completion_strategy: parse(
                "TODO_COMPLETION_STRATEGY",
                lookup("TODO_COMPLETION_STRATEGY"),
                defaults.completion_strategy,
            )?,
            event_publisher: parse(
                "TODO_EVENT_PUBLISHER",
                lookup("TODO_EVENT_PUBLISHER"),
                defaults.event_publisher,
            )?,
            notification_service_url: lookup("TODO_NOTIFICATION_SERVICE_URL")
                .unwrap_or(defaults.notification_service_url),
            events_endpoint: lookup("TODO_EVENTS_ENDPOINT").unwrap_or(defaults.events_endpoint),
            notification_delay: Duration::from_millis(delay_ms),
        })
    }

    /// Full url the remote publisher posts to.
    pub fn events_url(&self) -> String {
        format!(
            "{}{}",
            self.notification_service_url.trim_end_matches('/'),
            self.events_endpoint
        )
    }
}
