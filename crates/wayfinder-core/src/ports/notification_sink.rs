//! Notification display port.
//!
//! The notification service decides *what* is shown and for how long; a sink
//! only knows how to put a message on screen and take it down again.

use crate::domain::Notification;

/// Trait for displaying the single current notification.
///
/// # Implementations
///
/// - `NoopSink` - For tests and contexts without a display
/// - Adapter-specific implementations (console, toast widget, ...)
pub trait NotificationSink: Send + Sync {
    /// Show `notification`, replacing whatever is displayed.
    fn display(&self, notification: &Notification);

    /// Hide the displayed notification.
    fn dismiss(&self);
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    pub const fn new() -> Self {
        Self
    }
}

impl NotificationSink for NoopSink {
    fn display(&self, _notification: &Notification) {
        // Intentionally do nothing
    }

    fn dismiss(&self) {}
}
