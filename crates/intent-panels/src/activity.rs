//! Recent activity panel: analysis history records and their rendering.

use crate::style::{intent_glyph, CALENDAR_GLYPH, CLOCK_GLYPH, PANEL_WIDTH};
use intent_recognizer::IntentKind;
use serde::{Deserialize, Serialize};
use time::macros::{datetime, format_description};
use time::OffsetDateTime;
use uuid::{uuid, Uuid};

/// One row of analysis history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub transcript: String,
    pub intent: IntentKind,
    pub confidence: f32,
}

impl ActivityRecord {
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

/// Analysis history, newest first.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    records: Vec<ActivityRecord>,
}

impl ActivityLog {
    /// History pre-populated with three demonstration analyses.
    pub fn seeded() -> Self {
        Self {
            records: vec![
                ActivityRecord {
                    id: uuid!("6a5fe2ac-4bd4-4a25-9d61-352f9e1c8c26"),
                    timestamp: datetime!(2023-05-07 14:30 UTC),
                    transcript: "Can you schedule a meeting with the design team for tomorrow?"
                        .to_string(),
                    intent: IntentKind::Question,
                    confidence: 0.92,
                },
                ActivityRecord {
                    id: uuid!("0c7b8a9e-3d52-45cf-8f0b-6c2d9b7e4f11"),
                    timestamp: datetime!(2023-05-07 13:15 UTC),
                    transcript: "I need the quarterly report by Friday.".to_string(),
                    intent: IntentKind::Request,
                    confidence: 0.88,
                },
                ActivityRecord {
                    id: uuid!("e3f1d3a7-84c6-4bfa-b2f3-5a0dc8b91e72"),
                    timestamp: datetime!(2023-05-07 11:45 UTC),
                    transcript: "The new feature will be released next week.".to_string(),
                    intent: IntentKind::Statement,
                    confidence: 0.95,
                },
            ],
        }
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }
}

/// Format like "May 7, 2:30 PM".
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none], [hour repr:12 padding:none]:[minute] [period]"
    );
    timestamp.format(&format).unwrap_or_default()
}

/// Render the activity panel for a terminal.
pub fn render_activity_panel(log: &ActivityLog) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<34}{} View All\n",
        "Recent Activity", CALENDAR_GLYPH
    ));
    out.push_str("Your recent audio analysis history\n");
    out.push_str(&"─".repeat(PANEL_WIDTH));
    out.push('\n');

    for record in log.records() {
        out.push_str(&format!(
            "{} {}\n",
            intent_glyph(record.intent),
            record.transcript
        ));
        out.push_str(&format!(
            "   {} {} · Intent: {} · Confidence: {}%\n",
            CLOCK_GLYPH,
            format_timestamp(record.timestamp),
            record.intent.as_str(),
            record.confidence_percent()
        ));
    }
    out
}
