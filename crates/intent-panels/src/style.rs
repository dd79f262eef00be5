//! Glyph and colour assignments shared by the panels.

use colored::Color;
use intent_recognizer::IntentKind;

/// Visible width of a rendered panel, in columns.
pub const PANEL_WIDTH: usize = 46;

pub const CHECK_GLYPH: &str = "✓";
pub const CLOCK_GLYPH: &str = "🕐";
pub const CALENDAR_GLYPH: &str = "📅";

/// Glyph shown next to an intent label.
pub fn intent_glyph(intent: IntentKind) -> &'static str {
    match intent {
        IntentKind::Question => "❓",
        IntentKind::Statement => "💬",
        IntentKind::Request => "👍",
        IntentKind::Command => "❗",
        IntentKind::Error => "⚠",
    }
}

/// Colour used for an intent's label.
pub fn intent_tint(intent: IntentKind) -> Color {
    match intent {
        IntentKind::Question => Color::Blue,
        IntentKind::Statement => Color::Green,
        IntentKind::Request => Color::Magenta,
        IntentKind::Command => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        IntentKind::Error => Color::Red,
    }
}
