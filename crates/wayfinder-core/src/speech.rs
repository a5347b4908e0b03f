//! Voice-driven room resolution.
//!
//! One invocation owns one recognition session and yields exactly one outcome:
//!
//! ```text
//!   Idle ──(unsupported / start failure)──────────────┐
//!    │                                                 ▼
//!    └─→ Listening ──(result | error | end)──→ Concluded(outcome)
//! ```
//!
//! The platform may deliver result, error and end in any order, and may keep
//! delivering after we stop it. Once `Concluded`, every further event is
//! ignored, so the number of outcomes per invocation is exactly one.

use std::sync::Arc;

use crate::domain::{Room, Severity};
use crate::notifications::NotificationService;
use crate::ports::{
    RecognitionConfig, RecognitionErrorCode, RecognitionEvent, SpeechPortError,
    SpeechRecognizerPort,
};

/// Why a voice invocation produced no room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechFailure {
    /// The platform has no recognizer.
    Unsupported,
    /// Microphone access was refused.
    PermissionDenied,
    /// The session ended without a usable utterance.
    NoSpeech,
    /// The platform refused to start the session.
    StartFailure,
}

/// The single outcome of one voice invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    /// A transcript mentioned a known room.
    Resolved(Room),
    /// Speech was heard but named no known room.
    NoMatch {
        /// The platform's most likely transcript.
        transcript: String,
    },
    /// Nothing usable was heard.
    Failed(SpeechFailure),
}

impl SpeechOutcome {
    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            Self::Resolved(room) => format!("Recognized: {}", room.display_name()),
            Self::NoMatch { transcript } => {
                format!("Could not find a matching room in: \"{transcript}\". Please try again.")
            }
            Self::Failed(SpeechFailure::Unsupported) => {
                "Speech recognition is not supported on this platform.".to_string()
            }
            Self::Failed(SpeechFailure::PermissionDenied) => {
                "Microphone access denied. Please allow microphone access and try again."
                    .to_string()
            }
            Self::Failed(SpeechFailure::NoSpeech) => {
                "No speech was detected. Please try again.".to_string()
            }
            Self::Failed(SpeechFailure::StartFailure) => {
                "Could not start speech recognition. Please try again.".to_string()
            }
        }
    }

    /// Severity the message is shown with.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Resolved(_) => Severity::Success,
            Self::NoMatch { .. } | Self::Failed(_) => Severity::Error,
        }
    }

    /// The resolved room, if any.
    pub const fn room(&self) -> Option<&Room> {
        match self {
            Self::Resolved(room) => Some(room),
            _ => None,
        }
    }
}

/// First room named in any alternative, scanning alternatives in rank order
/// and rooms in catalog order.
pub fn match_transcripts<'r>(alternatives: &[String], rooms: &'r [Room]) -> Option<&'r Room> {
    alternatives.iter().enumerate().find_map(|(rank, text)| {
        let lowered = text.to_lowercase();
        tracing::debug!(rank, transcript = %lowered, "Scanning alternative");
        rooms.iter().find(|room| room.is_mentioned_in(&lowered))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Listening,
    Concluded(SpeechOutcome),
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Still listening.
    Pending,
    /// The event arrived after the session concluded (or before it started)
    /// and was dropped.
    Ignored,
    /// This event concluded the session.
    Concluded {
        /// The outcome to report.
        outcome: SpeechOutcome,
        /// Whether the platform session should be stopped now.
        stop_session: bool,
    },
}

/// State machine for one recognition session.
#[derive(Debug)]
pub struct SpeechResolution<'r> {
    rooms: &'r [Room],
    phase: Phase,
}

impl<'r> SpeechResolution<'r> {
    /// Start in `Idle`, matching against `rooms`.
    pub const fn new(rooms: &'r [Room]) -> Self {
        Self {
            rooms,
            phase: Phase::Idle,
        }
    }

    /// The session started: `Idle → Listening`.
    pub fn begin_listening(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Listening;
        }
    }

    /// Conclude before listening (unsupported, start failure).
    ///
    /// Returns the recorded outcome, which is the earlier one if the session
    /// had already concluded.
    pub fn fail(&mut self, failure: SpeechFailure) -> SpeechOutcome {
        if let Phase::Concluded(outcome) = &self.phase {
            return outcome.clone();
        }
        self.conclude(SpeechOutcome::Failed(failure))
    }

    /// Feed one platform callback.
    pub fn handle(&mut self, event: RecognitionEvent) -> Step {
        match self.phase {
            Phase::Listening => {}
            Phase::Idle | Phase::Concluded(_) => {
                tracing::debug!(?event, "Ignoring recognition event outside listening");
                return Step::Ignored;
            }
        }

        match event {
            RecognitionEvent::Result { alternatives } => {
                let outcome = match match_transcripts(&alternatives, self.rooms) {
                    Some(room) => SpeechOutcome::Resolved(room.clone()),
                    None => SpeechOutcome::NoMatch {
                        transcript: alternatives.first().cloned().unwrap_or_default(),
                    },
                };
                Step::Concluded {
                    outcome: self.conclude(outcome),
                    stop_session: true,
                }
            }
            RecognitionEvent::Error(RecognitionErrorCode::NotAllowed) => Step::Concluded {
                outcome: self.conclude(SpeechOutcome::Failed(SpeechFailure::PermissionDenied)),
                stop_session: false,
            },
            RecognitionEvent::Error(RecognitionErrorCode::NoSpeech) | RecognitionEvent::End => {
                Step::Concluded {
                    outcome: self.conclude(SpeechOutcome::Failed(SpeechFailure::NoSpeech)),
                    stop_session: false,
                }
            }
            RecognitionEvent::Error(code) => {
                // The end event that follows concludes the session.
                tracing::warn!(?code, "Recognition error");
                Step::Pending
            }
        }
    }

    /// The outcome, once concluded.
    pub const fn outcome(&self) -> Option<&SpeechOutcome> {
        match &self.phase {
            Phase::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether the session is listening.
    pub fn is_listening(&self) -> bool {
        self.phase == Phase::Listening
    }

    fn conclude(&mut self, outcome: SpeechOutcome) -> SpeechOutcome {
        self.phase = Phase::Concluded(outcome.clone());
        outcome
    }
}

/// Runs voice invocations against the platform recognizer.
#[derive(Clone)]
pub struct SpeechResolutionController {
    recognizer: Arc<dyn SpeechRecognizerPort>,
    config: RecognitionConfig,
    notifications: NotificationService,
}

impl SpeechResolutionController {
    /// Create a controller.
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizerPort>,
        config: RecognitionConfig,
        notifications: NotificationService,
    ) -> Self {
        Self {
            recognizer,
            config,
            notifications,
        }
    }

    /// Listen for one utterance and resolve it against `rooms`.
    ///
    /// Reports the outcome through the notification service exactly once.
    pub async fn resolve(&self, rooms: &[Room]) -> SpeechOutcome {
        let mut resolution = SpeechResolution::new(rooms);
        let outcome = self.run(&mut resolution).await;

        tracing::info!(?outcome, "Voice input concluded");
        self.notifications.show(outcome.message(), outcome.severity());
        outcome
    }

    async fn run(&self, resolution: &mut SpeechResolution<'_>) -> SpeechOutcome {
        let mut session = match self.recognizer.open_session(&self.config) {
            Ok(session) => session,
            Err(SpeechPortError::Unsupported) => {
                return resolution.fail(SpeechFailure::Unsupported);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not open recognition session");
                return resolution.fail(SpeechFailure::StartFailure);
            }
        };

        if let Err(e) = session.start() {
            tracing::warn!(error = %e, "Could not start recognition session");
            return resolution.fail(match e {
                SpeechPortError::Unsupported => SpeechFailure::Unsupported,
                SpeechPortError::StartFailed { .. } => SpeechFailure::StartFailure,
            });
        }

        resolution.begin_listening();
        self.notifications
            .info("Listening... Please speak the room name.");

        loop {
            // A closed event stream is the platform's end.
            let event = session.next_event().await.unwrap_or(RecognitionEvent::End);
            tracing::debug!(?event, "Recognition event");

            match resolution.handle(event) {
                Step::Concluded {
                    outcome,
                    stop_session,
                } => {
                    if stop_session {
                        session.stop();
                    }
                    return outcome;
                }
                Step::Pending | Step::Ignored => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms(names: &[&str]) -> Vec<Room> {
        names.iter().map(|name| Room::new(name)).collect()
    }

    fn result(alternatives: &[&str]) -> RecognitionEvent {
        RecognitionEvent::Result {
            alternatives: alternatives.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_rank_order_first_hit_wins() {
        let rooms = rooms(&["room 101", "room 1"]);
        let alternatives: Vec<String> = ["turn left", "room one oh one", "room 101"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            match_transcripts(&alternatives, &rooms).map(Room::key),
            Some("room 101")
        );
    }

    #[test]
    fn test_catalog_order_within_an_alternative() {
        // "room 1" is a substring of "room 101"; catalog order decides.
        let rooms = rooms(&["room 1", "room 101"]);
        let alternatives = vec!["go to room 101".to_string()];
        assert_eq!(
            match_transcripts(&alternatives, &rooms).map(Room::key),
            Some("room 1")
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rooms = rooms(&["Pharmacy"]);
        let alternatives = vec!["Where is the PHARMACY".to_string()];
        assert!(match_transcripts(&alternatives, &rooms).is_some());
    }

    #[test]
    fn test_events_before_listening_are_ignored() {
        let rooms = rooms(&["gym"]);
        let mut resolution = SpeechResolution::new(&rooms);
        assert_eq!(resolution.handle(result(&["gym"])), Step::Ignored);
        assert!(resolution.outcome().is_none());
    }

    #[test]
    fn test_result_concludes_and_requests_stop() {
        let rooms = rooms(&["gym"]);
        let mut resolution = SpeechResolution::new(&rooms);
        resolution.begin_listening();
        assert!(resolution.is_listening());

        let step = resolution.handle(result(&["the gym please"]));
        assert_eq!(
            step,
            Step::Concluded {
                outcome: SpeechOutcome::Resolved(Room::new("gym")),
                stop_session: true,
            }
        );
        assert_eq!(resolution.handle(RecognitionEvent::End), Step::Ignored);
        assert_eq!(
            resolution.handle(RecognitionEvent::Error(RecognitionErrorCode::NoSpeech)),
            Step::Ignored
        );
        assert_eq!(resolution.outcome().and_then(SpeechOutcome::room), Some(&Room::new("gym")));
    }

    #[test]
    fn test_no_match_reports_best_transcript() {
        let rooms = rooms(&["gym"]);
        let mut resolution = SpeechResolution::new(&rooms);
        resolution.begin_listening();
        let step = resolution.handle(result(&["Cafeteria", "cafe teria"]));
        let Step::Concluded { outcome, .. } = step else {
            panic!("expected conclusion, got {step:?}");
        };
        assert_eq!(
            outcome,
            SpeechOutcome::NoMatch {
                transcript: "Cafeteria".to_string()
            }
        );
        assert_eq!(
            outcome.message(),
            "Could not find a matching room in: \"Cafeteria\". Please try again."
        );
    }

    #[test]
    fn test_unknown_error_waits_for_end() {
        let rooms = rooms(&["gym"]);
        let mut resolution = SpeechResolution::new(&rooms);
        resolution.begin_listening();
        assert_eq!(
            resolution.handle(RecognitionEvent::Error(RecognitionErrorCode::Network)),
            Step::Pending
        );
        let step = resolution.handle(RecognitionEvent::End);
        assert!(matches!(
            step,
            Step::Concluded {
                outcome: SpeechOutcome::Failed(SpeechFailure::NoSpeech),
                stop_session: false
            }
        ));
    }

    #[test]
    fn test_fail_keeps_first_outcome() {
        let rooms = rooms(&[]);
        let mut resolution = SpeechResolution::new(&rooms);
        assert_eq!(
            resolution.fail(SpeechFailure::Unsupported),
            SpeechOutcome::Failed(SpeechFailure::Unsupported)
        );
        assert_eq!(
            resolution.fail(SpeechFailure::StartFailure),
            SpeechOutcome::Failed(SpeechFailure::Unsupported)
        );
    }

    #[test]
    fn test_outcome_severity() {
        assert_eq!(
            SpeechOutcome::Resolved(Room::new("gym")).severity(),
            Severity::Success
        );
        assert_eq!(
            SpeechOutcome::Failed(SpeechFailure::NoSpeech).severity(),
            Severity::Error
        );
        assert_eq!(
            SpeechOutcome::Resolved(Room::new("gym")).message(),
            "Recognized: Gym"
        );
    }
}
