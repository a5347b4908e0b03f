//! Listen command handler.
//!
//! A terminal has no speech engine, so the recognizer replays what the user
//! typed as `--heard` alternatives. Without any, the session ends without
//! speech.

use std::io::Write;
use std::sync::Arc;

use wayfinder_core::{
    LocationField, RecognitionErrorCode, RecognitionEvent, ScriptedRecognizer, SpeechOutcome,
    SpeechRecognizerPort,
};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// The recognizer standing in for a microphone.
pub fn recognizer_for(heard: &[String], deny_microphone: bool) -> Arc<dyn SpeechRecognizerPort> {
    if deny_microphone {
        return Arc::new(ScriptedRecognizer::new(vec![
            RecognitionEvent::Error(RecognitionErrorCode::NotAllowed),
            RecognitionEvent::End,
        ]));
    }
    if heard.is_empty() {
        return Arc::new(ScriptedRecognizer::new(vec![RecognitionEvent::End]));
    }
    Arc::new(ScriptedRecognizer::hearing(heard.iter().cloned()))
}

/// Execute the listen command.
///
/// Prints `field: Room` when the utterance named a room.
pub async fn execute(
    ctx: &mut CliContext,
    field: LocationField,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let navigator = &mut ctx.navigator;
    navigator.initialize().await;

    match navigator.voice_input(field).await {
        SpeechOutcome::Resolved(room) => {
            writeln!(out, "{}: {}", field.as_str(), room.display_name())?;
            Ok(())
        }
        other => Err(CliError::Reported(other.message())),
    }
}
