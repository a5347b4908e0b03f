//! A recognizer that replays a fixed event script.
//!
//! Used by tests to drive exact callback interleavings, and by headless
//! adapters (the CLI) where typed text stands in for a microphone.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::speech::{
    RecognitionConfig, RecognitionEvent, RecognitionSession, SpeechPortError, SpeechRecognizerPort,
};

/// Recognizer whose sessions deliver a predetermined list of events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    script: Vec<RecognitionEvent>,
    start_error: Option<String>,
    opened: Arc<AtomicUsize>,
    stops: Arc<AtomicUsize>,
}

impl ScriptedRecognizer {
    /// Sessions will deliver `script` in order, then nothing.
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// The usual single-utterance script: one result, then end.
    pub fn hearing<I, S>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(vec![
            RecognitionEvent::Result {
                alternatives: alternatives.into_iter().map(Into::into).collect(),
            },
            RecognitionEvent::End,
        ])
    }

    /// Make `start` fail with `message`.
    #[must_use]
    pub fn failing_to_start(mut self, message: impl Into<String>) -> Self {
        self.start_error = Some(message.into());
        self
    }

    /// Sessions opened so far.
    pub fn sessions_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// `stop` calls across all sessions.
    pub fn stop_calls(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl SpeechRecognizerPort for ScriptedRecognizer {
    fn open_session(
        &self,
        config: &RecognitionConfig,
    ) -> Result<Box<dyn RecognitionSession>, SpeechPortError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(language = %config.language, events = self.script.len(), "Opening scripted session");
        Ok(Box::new(ScriptedSession {
            events: self.script.iter().cloned().collect(),
            start_error: self.start_error.clone(),
            stops: Arc::clone(&self.stops),
        }))
    }
}

struct ScriptedSession {
    events: VecDeque<RecognitionEvent>,
    start_error: Option<String>,
    stops: Arc<AtomicUsize>,
}

#[async_trait]
impl RecognitionSession for ScriptedSession {
    fn start(&mut self) -> Result<(), SpeechPortError> {
        match self.start_error.take() {
            Some(message) => Err(SpeechPortError::StartFailed { message }),
            None => Ok(()),
        }
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    async fn next_event(&mut self) -> Option<RecognitionEvent> {
        self.events.pop_front()
    }
}
