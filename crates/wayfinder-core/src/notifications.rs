//! Single-slot notification channel with auto-dismiss.
//!
//! Every `show` replaces the current notification and starts its own timer.
//! Each notification is stamped with a generation number; a timer only clears
//! the slot if the generation it captured is still the current one, so a stale
//! timer can never hide a newer message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::{Notification, Severity};
use crate::ports::NotificationSink;

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    current: Option<Notification>,
}

/// Process-wide notification slot.
///
/// Cheap to clone; clones share the slot. Sinks are called with the slot
/// locked and must not call back into the service.
#[derive(Clone)]
pub struct NotificationService {
    slot: Arc<Mutex<Slot>>,
    sink: Arc<dyn NotificationSink>,
    timeout: Duration,
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl NotificationService {
    /// Create a service that displays through `sink` for `timeout` per message.
    pub fn new(sink: Arc<dyn NotificationSink>, timeout: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            sink,
            timeout,
        }
    }

    /// Display `message`, replacing anything shown, and schedule its removal.
    ///
    /// Returns the generation stamped on this notification. Outside a tokio
    /// runtime no timer is scheduled and the message stays until replaced.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let notification = Notification {
            message: message.into(),
            severity,
            expires_at: Instant::now() + self.timeout,
        };

        // The sink is driven under the slot lock so that its display order
        // always matches the slot's generation order.
        let generation = {
            let mut slot = self.lock();
            slot.generation += 1;
            tracing::debug!(
                generation = slot.generation,
                severity = %severity,
                text = %notification.message,
                "Notification shown"
            );
            self.sink.display(&notification);
            slot.current = Some(notification);
            slot.generation
        };

        self.schedule_clear(generation);
        generation
    }

    /// Shorthand for [`Severity::Info`].
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Info)
    }

    /// Shorthand for [`Severity::Success`].
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success)
    }

    /// Shorthand for [`Severity::Error`].
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Error)
    }

    /// Clear the slot if `generation` is still the displayed notification.
    ///
    /// Returns whether anything was cleared.
    pub fn clear_if_current(&self, generation: u64) -> bool {
        let mut slot = self.lock();
        if slot.generation != generation || slot.current.is_none() {
            return false;
        }
        slot.current = None;
        tracing::debug!(generation, "Notification expired");
        self.sink.dismiss();
        true
    }

    /// The notification currently displayed.
    pub fn current(&self) -> Option<Notification> {
        self.lock().current.clone()
    }

    /// Generation of the most recent `show`.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Configured display duration.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn schedule_clear(&self, generation: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(generation, "No runtime; notification will not auto-clear");
            return;
        };

        let service = self.clone();
        let timeout = self.timeout;
        handle.spawn(async move {
            tokio::time::sleep(timeout).await;
            service.clear_if_current(generation);
        });
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // The slot holds plain data, so a poisoned lock is still consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
