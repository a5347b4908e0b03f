#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod autocomplete;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ports;
pub mod render;
pub mod services;
pub mod settings;
pub mod speech;

// Re-export commonly used types for convenience
pub use autocomplete::{AutocompleteFilter, LocationField, filter_rooms};
pub use catalog::{CatalogState, RoomCatalog, load_catalog};
pub use domain::{
    DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS, GridCell, GridExtent, Notification, Room, RoomBlock,
    RoutePath, Severity, SurfacePoint, SurfaceSize, title_case,
};
pub use error::NavigationError;
pub use notifications::NotificationService;
pub use ports::{
    ApiError, ApiResult, Color, DrawOp, DrawingSurface, LineCap, LineJoin, NavigationApiPort,
    NoopSink, NotificationSink, RecognitionConfig, RecognitionErrorCode, RecognitionEvent,
    RecognitionSession, RecordingSurface, RouteRequest, ScriptedRecognizer, SpeechPortError,
    SpeechRecognizerPort, StrokeStyle, UnsupportedRecognizer,
};
pub use render::{CoordinateMapper, PathRenderer, PathStyle, RenderOutcome};
pub use services::{MAPPED_FLOOR, Navigator, NavigatorDeps, RouteSummary};
pub use settings::{NavigatorSettings, SettingsError, validate_settings};
pub use speech::{
    SpeechFailure, SpeechOutcome, SpeechResolution, SpeechResolutionController, Step,
    match_transcripts,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
