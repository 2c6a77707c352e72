//! Notification service port (driven/secondary port)
//!
//! This module defines the interface for showing transient, non-blocking
//! messages to the user (toasts). Implementations may render to a
//! terminal, a desktop notification daemon, or a UI toast container.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because notification delivery is adapter-specific.
//! - Notifications are fire-and-forget; the caller never waits for user
//!   interaction and a delivery failure never changes an operation's result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notification
///
/// Maps to the toast variants a UI typically offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    /// Neutral information
    Info,
    /// An operation completed
    Success,
    /// Something the user should look at
    Warning,
    /// An operation failed
    Error,
}

impl Default for NotificationLevel {
    fn default() -> Self {
        NotificationLevel::Info
    }
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A message to show to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Severity affecting how the message is displayed
    pub level: NotificationLevel,
    /// Text shown to the user
    pub message: String,
    /// When the notification was raised
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a notification with the given level, stamped now
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            issued_at: Utc::now(),
        }
    }

    /// Creates an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

/// Port trait for user-facing notifications
///
/// Implementations should handle delivery failures gracefully; the cart
/// store logs an error returned from `notify` and carries on.
#[async_trait::async_trait]
pub trait INotificationService: Send + Sync {
    /// Shows a notification to the user
    async fn notify(&self, notification: &Notification) -> anyhow::Result<()>;
}
