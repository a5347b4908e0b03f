//! Speech recognition port.
//!
//! Models a platform recognizer in the shape browsers and OS speech services
//! expose: a short-lived session, configured for one utterance, that reports
//! through three callback channels (result, error, end). The channels are
//! delivered here as a single event stream whose order the platform decides.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default recognition language.
pub const DEFAULT_SPEECH_LANGUAGE: &str = "en-US";

/// Default number of ranked alternatives requested per result.
pub const DEFAULT_MAX_ALTERNATIVES: u8 = 3;

/// Session configuration handed to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// BCP-47 language tag.
    pub language: String,
    /// Keep listening after the first utterance.
    pub continuous: bool,
    /// Report partial transcripts.
    pub interim_results: bool,
    /// Ranked alternatives per result (most likely first).
    pub max_alternatives: u8,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_SPEECH_LANGUAGE.to_string(),
            continuous: false,
            interim_results: false,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

/// Error codes a platform reports on its error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorCode {
    /// Microphone permission refused.
    NotAllowed,
    /// Nothing was heard before the platform gave up.
    NoSpeech,
    /// The session was aborted (usually by our own stop).
    Aborted,
    /// The platform's recognition service could not be reached.
    Network,
    /// Anything else, verbatim.
    Other(String),
}

impl RecognitionErrorCode {
    /// Parse the platform's error string (`not-allowed`, `no-speech`, ...).
    pub fn from_platform(code: &str) -> Self {
        match code {
            "not-allowed" | "service-not-allowed" => Self::NotAllowed,
            "no-speech" => Self::NoSpeech,
            "aborted" => Self::Aborted,
            "network" => Self::Network,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One callback from a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Result channel: ranked alternative transcripts, most likely first.
    Result {
        /// Alternative transcripts.
        alternatives: Vec<String>,
    },
    /// Error channel.
    Error(RecognitionErrorCode),
    /// End channel: the platform closed the session.
    End,
}

/// Failures acquiring or starting a recognition session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeechPortError {
    /// The platform has no speech recognition capability.
    #[error("Speech recognition is not supported on this platform")]
    Unsupported,

    /// The platform refused to start the session.
    #[error("Could not start speech recognition: {message}")]
    StartFailed {
        /// Platform-supplied reason
        message: String,
    },
}

/// A live recognition session.
///
/// Sessions are owned by exactly one resolution and dropped once it reaches a
/// terminal outcome; they are never reused.
#[async_trait]
pub trait RecognitionSession: Send {
    /// Begin listening.
    fn start(&mut self) -> Result<(), SpeechPortError>;

    /// Ask the platform to stop. Safe to call more than once.
    fn stop(&mut self);

    /// Wait for the next callback. `None` once the platform has nothing more
    /// to deliver.
    async fn next_event(&mut self) -> Option<RecognitionEvent>;
}

/// Port trait for the platform speech recognizer.
pub trait SpeechRecognizerPort: Send + Sync {
    /// Create a new, not yet started session.
    ///
    /// Returns [`SpeechPortError::Unsupported`] when the platform lacks the
    /// capability.
    fn open_session(
        &self,
        config: &RecognitionConfig,
    ) -> Result<Box<dyn RecognitionSession>, SpeechPortError>;
}

/// Recognizer for platforms without speech support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizerPort for UnsupportedRecognizer {
    fn open_session(
        &self,
        _config: &RecognitionConfig,
    ) -> Result<Box<dyn RecognitionSession>, SpeechPortError> {
        Err(SpeechPortError::Unsupported)
    }
}
