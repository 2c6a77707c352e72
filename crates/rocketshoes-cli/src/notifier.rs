//! Terminal toast notifications
//!
//! Renders [`Notification`]s on stderr so they never mix with the command's
//! own output on stdout.

use std::io::Write;

use anyhow::{Context, Result};
use rocketshoes_core::ports::{INotificationService, Notification, NotificationLevel};

use crate::output::OutputFormat;

/// [`INotificationService`] writing one line per notification to stderr
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    format: OutputFormat,
}

impl ToastNotifier {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders a notification as a single line
    pub fn render(&self, notification: &Notification) -> String {
        if self.format.is_json() {
            serde_json::json!({ "notification": notification }).to_string()
        } else {
            format!("{} {}", icon(notification.level), notification.message)
        }
    }
}

fn icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "\u{2139}",
        NotificationLevel::Success => "\u{2713}",
        NotificationLevel::Warning => "\u{26a0}",
        NotificationLevel::Error => "\u{2717}",
    }
}

#[async_trait::async_trait]
impl INotificationService for ToastNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let line = self.render(notification);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{line}").context("Failed to write notification")?;
        Ok(())
    }
}
