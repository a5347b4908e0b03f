//! Terminal notification sink.

use std::io::Write;

use wayfinder_core::{Notification, NotificationSink};

/// Prints each notification to stderr as `[severity] message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    pub const fn new() -> Self {
        Self
    }
}

/// One notification as a terminal line.
pub fn format_notification(notification: &Notification) -> String {
    format!("[{}] {}", notification.severity, notification.message)
}

impl NotificationSink for ConsoleSink {
    fn display(&self, notification: &Notification) {
        let mut stderr = std::io::stderr().lock();
        // A closed stderr has nowhere to report to.
        let _ = writeln!(stderr, "{}", format_notification(notification));
    }

    fn dismiss(&self) {
        // Printed lines stay in the scrollback
        tracing::trace!("Notification expired");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::Severity;

    #[test]
    fn test_format_notification() {
        let notification = Notification {
            message: "Path cleared.".to_string(),
            severity: Severity::Success,
            expires_at: tokio::time::Instant::now(),
        };
        assert_eq!(format_notification(&notification), "[success] Path cleared.");
    }
}
