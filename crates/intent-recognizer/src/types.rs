use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label for the speaker's communicative goal.
///
/// The four non-error kinds are the only ones a recognizer backend
/// produces on success; `Error` is the sentinel carried when a failed
/// analysis is handed to the display path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    Question,
    Statement,
    Request,
    Command,
    Error,
}

impl IntentKind {
    /// Wire/display-lowercase name ("question", "statement", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Question => "question",
            IntentKind::Statement => "statement",
            IntentKind::Request => "request",
            IntentKind::Command => "command",
            IntentKind::Error => "error",
        }
    }

    /// Capitalized label for headline rendering.
    pub fn label(&self) -> &'static str {
        match self {
            IntentKind::Question => "Question",
            IntentKind::Statement => "Statement",
            IntentKind::Request => "Request",
            IntentKind::Command => "Command",
            IntentKind::Error => "Error",
        }
    }

    /// Parse a lowercase intent label, e.g. from an inference service.
    pub fn parse(label: &str) -> Option<IntentKind> {
        match label {
            "question" => Some(IntentKind::Question),
            "statement" => Some(IntentKind::Statement),
            "request" => Some(IntentKind::Request),
            "command" => Some(IntentKind::Command),
            "error" => Some(IntentKind::Error),
            _ => None,
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types of entities a recognizer can extract from an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Topic,
    Document,
    Action,
    Time,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Topic => "topic",
            EntityKind::Document => "document",
            EntityKind::Action => "action",
            EntityKind::Time => "time",
        }
    }

    /// Parse an entity type label from an inference service.
    pub fn parse(label: &str) -> Option<EntityKind> {
        match label {
            "topic" => Some(EntityKind::Topic),
            "document" => Some(EntityKind::Document),
            "action" => Some(EntityKind::Action),
            "time" => Some(EntityKind::Time),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed key/value fragment extracted from an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Type of entity
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Extracted value as text
    pub value: String,
}

impl Entity {
    pub fn new(kind: EntityKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Result of analyzing one audio clip.
///
/// Lives only for the duration of one display cycle; nothing persists
/// it. `confidence` is in [0, 1] and is only meaningful when `intent`
/// is not `Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Recognized intent
    pub intent: IntentKind,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f32,
    /// Transcribed utterance
    pub transcript: String,
    /// Extracted entities, in extraction order
    pub entities: Vec<Entity>,
}

impl AnalysisResult {
    /// Confidence as a rounded integer percentage.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }

    pub fn is_error(&self) -> bool {
        self.intent == IntentKind::Error
    }

    /// Wrap a recognizer failure as an error-intent result so it flows
    /// through the same display path as a successful analysis.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            intent: IntentKind::Error,
            confidence: 0.0,
            transcript: message.into(),
            entities: Vec::new(),
        }
    }
}

/// Configuration for recognizer backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Backend id ("mock", "remote")
    pub backend: String,
    /// Artificial processing delay for the mock backend, in milliseconds
    pub processing_delay_ms: u64,
    /// Inference endpoint for the remote backend
    pub endpoint: Option<String>,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Shortest clip the remote backend will submit, in milliseconds
    pub min_clip_ms: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            backend: "mock".to_string(),
            processing_delay_ms: 1500,
            endpoint: None,
            request_timeout_ms: 10_000,
            min_clip_ms: 500,
        }
    }
}

/// Metadata about a recognizer backend.
#[derive(Debug, Clone)]
pub struct RecognizerMetadata {
    pub name: String,
    pub version: String,
    pub backend: String,
}
