//! Intent display panel: a small state machine plus its text rendering.

use crate::style::{intent_glyph, intent_tint, CHECK_GLYPH, PANEL_WIDTH};
use colored::Colorize;
use intent_recognizer::AnalysisResult;
use std::time::Duration;
use tokio::time::Instant;

/// What the intent panel is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// Nothing analyzed yet.
    Idle,
    /// A result has arrived and is counting down to its reveal.
    Analyzing,
    /// The most recent analysis, revealed.
    Resolved(AnalysisResult),
}

/// Panel state machine.
///
/// A finished analysis is not shown immediately. The panel holds it back
/// for a short reveal delay, showing a progress indicator instead. If
/// another analysis lands during the countdown it replaces the held one
/// and restarts the countdown, so the newest result always wins.
pub struct IntentPanel {
    state: DisplayState,
    pending: Option<AnalysisResult>,
    reveal_delay: Duration,
    reveal_at: Option<Instant>,
}

impl IntentPanel {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            state: DisplayState::Idle,
            pending: None,
            reveal_delay,
            reveal_at: None,
        }
    }

    /// Record a finished analysis and start the reveal countdown.
    pub fn on_notification(&mut self, result: AnalysisResult) {
        self.state = DisplayState::Analyzing;
        self.pending = Some(result);
        self.reveal_at = Some(Instant::now() + self.reveal_delay);
    }

    /// Promote the held result onto the panel.
    pub fn reveal(&mut self) {
        if let Some(result) = self.pending.take() {
            self.state = DisplayState::Resolved(result);
        }
        self.reveal_at = None;
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Deadline of the pending reveal, if one is counting down.
    pub fn reveal_at(&self) -> Option<Instant> {
        self.reveal_at
    }
}

const PROGRESS_CELLS: usize = 10;
const ANALYZING_PROGRESS: usize = 45;

fn progress_bar(percent: usize) -> String {
    let filled = (percent * PROGRESS_CELLS) / 100;
    format!(
        "{}{}",
        "▰".repeat(filled),
        "▱".repeat(PROGRESS_CELLS - filled)
    )
}

/// Render the intent panel for a terminal.
pub fn render_intent_panel(state: &DisplayState) -> String {
    let mut out = String::new();
    out.push_str("Intent Analysis\n");
    out.push_str("Recognized speaker intent from 3-second audio\n");
    out.push_str(&"─".repeat(PANEL_WIDTH));
    out.push('\n');

    match state {
        DisplayState::Idle => {
            out.push_str("💬 No Analysis Yet\n");
            out.push_str(
                "Record for 3 seconds or upload audio and run the analyzer to see the speaker's intent\n",
            );
        }
        DisplayState::Analyzing => {
            out.push_str("◌ Analyzing audio...\n");
            out.push_str(&progress_bar(ANALYZING_PROGRESS));
            out.push('\n');
        }
        DisplayState::Resolved(result) => {
            out.push_str(&format!(
                "{} {}\n",
                intent_glyph(result.intent),
                result.intent.label().color(intent_tint(result.intent))
            ));
            if !result.is_error() {
                out.push_str(&format!("Confidence: {}%\n", result.confidence_percent()));
            }
            out.push_str("\nTranscript\n");
            out.push_str(&format!("  {}\n", result.transcript));
            if !result.entities.is_empty() {
                out.push_str("\nRecognized Entities\n");
                for entity in &result.entities {
                    out.push_str(&format!(
                        "  {} {}: {}\n",
                        CHECK_GLYPH.green(),
                        entity.kind.as_str(),
                        entity.value
                    ));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use intent_recognizer::{Entity, EntityKind, IntentKind};

    fn question_result() -> AnalysisResult {
        AnalysisResult {
            intent: IntentKind::Question,
            confidence: 0.87,
            transcript: "When is our next team meeting scheduled?".to_string(),
            entities: vec![Entity::new(EntityKind::Topic, "meeting schedule")],
        }
    }

    #[test]
    fn test_panel_starts_idle() {
        let panel = IntentPanel::new(Duration::from_millis(1000));
        assert_eq!(panel.state(), &DisplayState::Idle);
        assert!(panel.reveal_at().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_schedules_reveal() {
        let mut panel = IntentPanel::new(Duration::from_millis(1000));

        panel.on_notification(question_result());

        assert_eq!(panel.state(), &DisplayState::Analyzing);
        assert_eq!(
            panel.reveal_at().unwrap(),
            Instant::now() + Duration::from_millis(1000)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_promotes_held_result() {
        let mut panel = IntentPanel::new(Duration::from_millis(1000));
        panel.on_notification(question_result());

        panel.reveal();

        assert_eq!(panel.state(), &DisplayState::Resolved(question_result()));
        assert!(panel.reveal_at().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newest_notification_replaces_held_result() {
        let mut panel = IntentPanel::new(Duration::from_millis(1000));
        panel.on_notification(question_result());

        let newer = AnalysisResult {
            intent: IntentKind::Command,
            confidence: 0.91,
            transcript: "Schedule a meeting for tomorrow at 2 PM.".to_string(),
            entities: vec![],
        };
        panel.on_notification(newer.clone());
        panel.reveal();

        assert_eq!(panel.state(), &DisplayState::Resolved(newer));
    }

    #[test]
    fn test_reveal_without_pending_is_a_no_op() {
        let mut panel = IntentPanel::new(Duration::from_millis(1000));
        panel.reveal();
        assert_eq!(panel.state(), &DisplayState::Idle);
    }

    #[test]
    fn test_render_idle() {
        let text = render_intent_panel(&DisplayState::Idle);
        assert!(text.contains("Intent Analysis"));
        assert!(text.contains("Recognized speaker intent from 3-second audio"));
        assert!(text.contains("No Analysis Yet"));
    }

    #[test]
    fn test_render_analyzing_shows_progress() {
        let text = render_intent_panel(&DisplayState::Analyzing);
        assert!(text.contains("Analyzing audio..."));
        assert!(text.contains("▰▰▰▰▱▱▱▱▱▱"));
    }

    #[test]
    fn test_render_resolved_question() {
        let text = render_intent_panel(&DisplayState::Resolved(question_result()));
        assert!(text.contains("❓"));
        assert!(text.contains("Question"));
        assert!(text.contains("Confidence: 87%"));
        assert!(text.contains("Transcript"));
        assert!(text.contains("When is our next team meeting scheduled?"));
        assert!(text.contains("Recognized Entities"));
        assert!(text.contains("topic: meeting schedule"));
    }

    #[test]
    fn test_render_error_hides_confidence() {
        let text = render_intent_panel(&DisplayState::Resolved(AnalysisResult::failure(
            "inference timed out after 10000ms",
        )));
        assert!(text.contains("⚠"));
        assert!(text.contains("Error"));
        assert!(!text.contains("Confidence:"));
        assert!(text.contains("inference timed out after 10000ms"));
    }

    #[test]
    fn test_render_omits_empty_entity_section() {
        let result = AnalysisResult {
            intent: IntentKind::Statement,
            confidence: 0.8,
            transcript: "The new feature is working as expected.".to_string(),
            entities: vec![],
        };
        let text = render_intent_panel(&DisplayState::Resolved(result));
        assert!(!text.contains("Recognized Entities"));
    }

    #[test]
    fn test_progress_bar_cell_count() {
        let bar = progress_bar(45);
        assert_eq!(bar.chars().count(), PROGRESS_CELLS);
        assert_eq!(bar.chars().filter(|c| *c == '▰').count(), 4);
    }
}
