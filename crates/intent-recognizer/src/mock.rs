//! Mock backend that fabricates plausible analyses without a model.

use crate::{
    AnalysisResult, AudioClip, Entity, EntityKind, IntentKind, IntentRecognizer, RecognizerConfig,
    RecognizerMetadata, Result,
};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

const QUESTION_TRANSCRIPTS: [&str; 3] = [
    "When is our next team meeting scheduled?",
    "Can you tell me where the conference room is?",
    "What time does the presentation start tomorrow?",
];

const STATEMENT_TRANSCRIPTS: [&str; 3] = [
    "The project will be completed by Friday.",
    "I've finished the report you requested.",
    "The new feature is working as expected.",
];

const REQUEST_TRANSCRIPTS: [&str; 3] = [
    "Please send me the latest version of the document.",
    "I need the quarterly report by tomorrow.",
    "Could you help me with this task?",
];

const COMMAND_TRANSCRIPTS: [&str; 3] = [
    "Schedule a meeting for tomorrow at 2 PM.",
    "Call John from marketing immediately.",
    "Send this email to the entire team.",
];

/// Intents the mock can report. Error never comes out of this backend.
const MOCK_INTENTS: [IntentKind; 4] = [
    IntentKind::Question,
    IntentKind::Statement,
    IntentKind::Request,
    IntentKind::Command,
];

fn transcript_pool(intent: IntentKind) -> &'static [&'static str] {
    match intent {
        IntentKind::Question => &QUESTION_TRANSCRIPTS,
        IntentKind::Request => &REQUEST_TRANSCRIPTS,
        IntentKind::Command => &COMMAND_TRANSCRIPTS,
        // Anything without its own pool reads as a statement.
        IntentKind::Statement | IntentKind::Error => &STATEMENT_TRANSCRIPTS,
    }
}

fn canned_entities(intent: IntentKind) -> Vec<Entity> {
    match intent {
        IntentKind::Question => vec![Entity::new(EntityKind::Topic, "meeting schedule")],
        IntentKind::Request => vec![Entity::new(EntityKind::Document, "quarterly report")],
        IntentKind::Command => vec![
            Entity::new(EntityKind::Action, "schedule"),
            Entity::new(EntityKind::Time, "2 PM"),
        ],
        IntentKind::Statement | IntentKind::Error => Vec::new(),
    }
}

/// Mock recognizer for demos and testing.
///
/// Sleeps for the configured processing delay, then returns a random
/// intent with a matching canned transcript and entity set.
pub struct MockRecognizer {
    delay: Duration,
}

impl MockRecognizer {
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.processing_delay_ms),
        }
    }
}

#[async_trait]
impl IntentRecognizer for MockRecognizer {
    async fn analyze(&self, clip: &AudioClip) -> Result<AnalysisResult> {
        tracing::debug!(
            clip_ms = clip.duration_ms(),
            delay_ms = self.delay.as_millis() as u64,
            "Running mock analysis"
        );
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        let intent = MOCK_INTENTS[rng.gen_range(0..MOCK_INTENTS.len())];
        let pool = transcript_pool(intent);
        let transcript = pool[rng.gen_range(0..pool.len())].to_string();

        Ok(AnalysisResult {
            intent,
            confidence: rng.gen_range(0.75..0.95),
            transcript,
            entities: canned_entities(intent),
        })
    }

    fn metadata(&self) -> RecognizerMetadata {
        RecognizerMetadata {
            name: "Mock Intent Recognizer".to_string(),
            version: "1.0.0".to_string(),
            backend: "mock".to_string(),
        }
    }
}
