//! Integration tests for voice room resolution.
//!
//! These drive `SpeechResolutionController` through scripted platform
//! callback orders. The platform may deliver result, error and end in any
//! combination; every script must yield exactly one reported outcome.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use wayfinder_core::{
    Notification, NotificationService, NotificationSink, RecognitionConfig, RecognitionErrorCode,
    RecognitionEvent, Room, ScriptedRecognizer, Severity, SpeechFailure, SpeechOutcome,
    SpeechRecognizerPort, SpeechResolution, SpeechResolutionController, Step,
    UnsupportedRecognizer,
};

// ── Helpers ────────────────────────────────────────────────────────

const LISTENING: &str = "Listening... Please speak the room name.";

/// Sink that remembers every message it was asked to display.
#[derive(Default)]
struct RecordingSink {
    shown: Mutex<Vec<(String, Severity)>>,
}

impl RecordingSink {
    fn shown(&self) -> Vec<(String, Severity)> {
        self.shown.lock().unwrap().clone()
    }

    /// Messages other than the "listening" prompt.
    fn outcomes(&self) -> Vec<(String, Severity)> {
        self.shown()
            .into_iter()
            .filter(|(message, _)| message != LISTENING)
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn display(&self, notification: &Notification) {
        self.shown
            .lock()
            .unwrap()
            .push((notification.message.clone(), notification.severity));
    }

    fn dismiss(&self) {}
}

fn catalog() -> Vec<Room> {
    ["library", "gym", "general ward", "room 101"]
        .into_iter()
        .map(Room::new)
        .collect()
}

fn controller(
    recognizer: Arc<dyn SpeechRecognizerPort>,
) -> (SpeechResolutionController, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let notifications = NotificationService::new(sink.clone(), Duration::from_secs(5));
    (
        SpeechResolutionController::new(recognizer, RecognitionConfig::default(), notifications),
        sink,
    )
}

fn result(alternatives: &[&str]) -> RecognitionEvent {
    RecognitionEvent::Result {
        alternatives: alternatives.iter().map(ToString::to_string).collect(),
    }
}

// ── Callback orders ────────────────────────────────────────────────

#[tokio::test]
async fn result_then_end_resolves_once_and_stops() {
    let recognizer = ScriptedRecognizer::new(vec![result(&["take me to the gym"]), RecognitionEvent::End]);
    let (controller, sink) = controller(Arc::new(recognizer.clone()));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Resolved(Room::new("gym")));
    assert_eq!(recognizer.sessions_opened(), 1);
    assert_eq!(recognizer.stop_calls(), 1);
    assert_eq!(
        sink.shown(),
        vec![
            (LISTENING.to_string(), Severity::Info),
            ("Recognized: Gym".to_string(), Severity::Success),
        ]
    );
}

#[tokio::test]
async fn later_alternative_is_used_when_the_first_names_no_room() {
    let recognizer = ScriptedRecognizer::hearing(["the jim", "the gym", "the library"]);
    let (controller, sink) = controller(Arc::new(recognizer));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome.room().map(Room::key), Some("gym"));
    assert_eq!(sink.outcomes().len(), 1);
}

#[tokio::test]
async fn unmatched_result_reports_top_transcript() {
    let recognizer = ScriptedRecognizer::hearing(["cafeteria", "cafe"]);
    let (controller, sink) = controller(Arc::new(recognizer.clone()));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(
        outcome,
        SpeechOutcome::NoMatch {
            transcript: "cafeteria".to_string()
        }
    );
    assert_eq!(recognizer.stop_calls(), 1);
    assert_eq!(
        sink.outcomes(),
        vec![(
            "Could not find a matching room in: \"cafeteria\". Please try again.".to_string(),
            Severity::Error
        )]
    );
}

#[tokio::test]
async fn no_speech_error_then_end_reports_once() {
    let recognizer = ScriptedRecognizer::new(vec![
        RecognitionEvent::Error(RecognitionErrorCode::NoSpeech),
        RecognitionEvent::End,
    ]);
    let (controller, sink) = controller(Arc::new(recognizer.clone()));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::NoSpeech));
    assert_eq!(recognizer.stop_calls(), 0);
    assert_eq!(sink.outcomes().len(), 1);
}

#[tokio::test]
async fn end_without_result_is_no_speech() {
    let recognizer = ScriptedRecognizer::new(vec![RecognitionEvent::End]);
    let (controller, sink) = controller(Arc::new(recognizer));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::NoSpeech));
    assert_eq!(
        sink.outcomes(),
        vec![(
            "No speech was detected. Please try again.".to_string(),
            Severity::Error
        )]
    );
}

#[tokio::test]
async fn closed_event_stream_counts_as_end() {
    let recognizer = ScriptedRecognizer::new(Vec::new());
    let (controller, _sink) = controller(Arc::new(recognizer));

    let outcome = controller.resolve(&catalog()).await;
    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::NoSpeech));
}

#[tokio::test]
async fn network_error_waits_for_end() {
    let recognizer = ScriptedRecognizer::new(vec![
        RecognitionEvent::Error(RecognitionErrorCode::Network),
        RecognitionEvent::End,
    ]);
    let (controller, sink) = controller(Arc::new(recognizer));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::NoSpeech));
    assert_eq!(sink.outcomes().len(), 1);
}

#[tokio::test]
async fn permission_denied_is_reported() {
    let recognizer = ScriptedRecognizer::new(vec![
        RecognitionEvent::Error(RecognitionErrorCode::from_platform("not-allowed")),
        RecognitionEvent::End,
    ]);
    let (controller, sink) = controller(Arc::new(recognizer));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::PermissionDenied));
    assert_eq!(
        sink.outcomes(),
        vec![(
            "Microphone access denied. Please allow microphone access and try again.".to_string(),
            Severity::Error
        )]
    );
}

// ── Failures before listening ──────────────────────────────────────

#[tokio::test]
async fn unsupported_platform_never_listens() {
    let (controller, sink) = controller(Arc::new(UnsupportedRecognizer));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::Unsupported));
    assert_eq!(
        sink.shown(),
        vec![(
            "Speech recognition is not supported on this platform.".to_string(),
            Severity::Error
        )]
    );
}

#[tokio::test]
async fn start_failure_is_reported_without_listening() {
    let recognizer = ScriptedRecognizer::hearing(["gym"]).failing_to_start("already started");
    let (controller, sink) = controller(Arc::new(recognizer.clone()));

    let outcome = controller.resolve(&catalog()).await;

    assert_eq!(outcome, SpeechOutcome::Failed(SpeechFailure::StartFailure));
    assert_eq!(recognizer.stop_calls(), 0);
    assert_eq!(sink.shown().len(), 1);
}

// ── Raw state machine ──────────────────────────────────────────────

#[test]
fn events_after_conclusion_are_ignored() {
    let rooms = catalog();
    let mut resolution = SpeechResolution::new(&rooms);

    assert_eq!(resolution.handle(RecognitionEvent::End), Step::Ignored);

    resolution.begin_listening();
    assert!(resolution.is_listening());

    let step = resolution.handle(result(&["library"]));
    assert_eq!(
        step,
        Step::Concluded {
            outcome: SpeechOutcome::Resolved(Room::new("library")),
            stop_session: true,
        }
    );

    // The platform keeps talking after stop.
    assert_eq!(
        resolution.handle(RecognitionEvent::Error(RecognitionErrorCode::Aborted)),
        Step::Ignored
    );
    assert_eq!(resolution.handle(RecognitionEvent::End), Step::Ignored);
    assert_eq!(
        resolution.outcome(),
        Some(&SpeechOutcome::Resolved(Room::new("library")))
    );
}

#[test]
fn failure_after_conclusion_keeps_first_outcome() {
    let rooms = catalog();
    let mut resolution = SpeechResolution::new(&rooms);
    resolution.begin_listening();
    resolution.handle(RecognitionEvent::End);

    assert_eq!(
        resolution.fail(SpeechFailure::StartFailure),
        SpeechOutcome::Failed(SpeechFailure::NoSpeech)
    );
}
