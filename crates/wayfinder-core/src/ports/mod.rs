//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from its environment.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - No platform speech or canvas types; adapters translate at the edge
//! - Headless stand-ins (`NoopSink`, `RecordingSurface`, `ScriptedRecognizer`)
//!   live beside their ports

pub mod navigation_api;
pub mod notification_sink;
pub mod scripted_speech;
pub mod speech;
pub mod surface;

pub use navigation_api::{ApiError, ApiResult, NavigationApiPort, RouteRequest};
pub use notification_sink::{NoopSink, NotificationSink};
pub use scripted_speech::ScriptedRecognizer;
pub use speech::{
    DEFAULT_MAX_ALTERNATIVES, DEFAULT_SPEECH_LANGUAGE, RecognitionConfig, RecognitionErrorCode,
    RecognitionEvent, RecognitionSession, SpeechPortError, SpeechRecognizerPort,
    UnsupportedRecognizer,
};
pub use surface::{
    Color, DrawOp, DrawingSurface, LineCap, LineJoin, RecordingSurface, StrokeStyle,
};
