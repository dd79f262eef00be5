//! intent-panels: terminal panels for the intent recognition demo
//!
//! This crate holds the display-side state machines and rendering: the
//! intent analysis panel with its delayed reveal, and the recent activity
//! history panel.

mod style;
pub use style::{intent_glyph, intent_tint, CALENDAR_GLYPH, CHECK_GLYPH, CLOCK_GLYPH, PANEL_WIDTH};

mod display;
pub use display::{render_intent_panel, DisplayState, IntentPanel};

mod task;
pub use task::run_intent_panel;

mod activity;
pub use activity::{format_timestamp, render_activity_panel, ActivityLog, ActivityRecord};
