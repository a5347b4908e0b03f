//! User-facing notification values.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral information.
    Info,
    /// A completed action.
    Success,
    /// A failed action.
    Error,
}

impl Severity {
    /// Lower-case label used in logs and console output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A displayed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
    /// When the auto-clear timer fires.
    pub expires_at: Instant,
}
