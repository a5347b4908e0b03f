//! Navigator settings and validation.
//!
//! Pure configuration types with no infrastructure dependencies. Every field
//! has a default matching the reference floor-plan deployment, so a partial
//! JSON document is a valid settings file.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{GridExtent, SurfaceSize};
use crate::ports::RecognitionConfig;

/// Default time a notification stays visible.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 5_000;

/// Default route stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Default start/end marker radius in pixels.
pub const DEFAULT_MARKER_RADIUS: f64 = 8.0;

/// Upper bound on requested speech alternatives.
pub const MAX_SPEECH_ALTERNATIVES: u8 = 10;

/// Navigator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Logical grid the backend routes on.
    pub grid: GridExtent,

    /// Pixel size of the floor-plan surface.
    pub surface: SurfaceSize,

    /// How long a notification stays up, in milliseconds.
    pub notification_timeout_ms: u64,

    /// Speech session configuration.
    pub speech: RecognitionConfig,

    /// Route stroke width in pixels.
    pub stroke_width: f64,

    /// Start/end marker radius in pixels.
    pub marker_radius: f64,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            grid: GridExtent::default(),
            surface: SurfaceSize::default(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            speech: RecognitionConfig::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
        }
    }
}

impl NavigatorSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        validate_settings(&settings)?;
        Ok(settings)
    }

    /// Notification timeout as a `Duration`.
    pub const fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The settings document is not valid JSON for this schema.
    #[error("Could not parse settings: {0}")]
    Parse(String),

    /// The grid has no rows or columns.
    #[error("Grid extent must be at least 1x1, got {rows}x{columns}")]
    EmptyGrid {
        /// Configured rows
        rows: u32,
        /// Configured columns
        columns: u32,
    },

    /// The surface has no area.
    #[error("Surface width and height must be positive")]
    EmptySurface,

    /// Notifications would vanish immediately.
    #[error("Notification timeout must be greater than zero")]
    ZeroTimeout,

    /// Out-of-range alternative count.
    #[error("Speech alternatives must be between 1 and {MAX_SPEECH_ALTERNATIVES}, got {0}")]
    InvalidAlternatives(u8),

    /// Stroke or marker size is not positive.
    #[error("Stroke width and marker radius must be positive")]
    InvalidStyle,
}

/// Validate settings values.
pub fn validate_settings(settings: &NavigatorSettings) -> Result<(), SettingsError> {
    if settings.grid.rows == 0 || settings.grid.columns == 0 {
        return Err(SettingsError::EmptyGrid {
            rows: settings.grid.rows,
            columns: settings.grid.columns,
        });
    }

    // Written so NaN also fails.
    if !(settings.surface.width > 0.0 && settings.surface.height > 0.0) {
        return Err(SettingsError::EmptySurface);
    }

    if settings.notification_timeout_ms == 0 {
        return Err(SettingsError::ZeroTimeout);
    }

    let alternatives = settings.speech.max_alternatives;
    if alternatives == 0 || alternatives > MAX_SPEECH_ALTERNATIVES {
        return Err(SettingsError::InvalidAlternatives(alternatives));
    }

    if !(settings.stroke_width > 0.0 && settings.marker_radius > 0.0) {
        return Err(SettingsError::InvalidStyle);
    }

    Ok(())
}
