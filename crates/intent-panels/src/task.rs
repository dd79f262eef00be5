//! Async driver that feeds analysis notifications through an [`IntentPanel`].

use crate::{DisplayState, IntentPanel};
use intent_recognizer::AnalysisResult;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::time::Instant;

/// Drive a panel from analysis notifications until the channel closes.
///
/// Every state change is published on `state_tx`. A notification that
/// arrives while an earlier reveal is still counting down replaces it,
/// so only the newest result is ever shown.
pub async fn run_intent_panel(
    mut notify_rx: broadcast::Receiver<AnalysisResult>,
    state_tx: watch::Sender<DisplayState>,
    reveal_delay: Duration,
) {
    let mut panel = IntentPanel::new(reveal_delay);

    loop {
        tokio::select! {
            notification = notify_rx.recv() => match notification {
                Ok(result) => {
                    tracing::debug!(intent = %result.intent, "Analysis notification received");
                    panel.on_notification(result);
                    let _ = state_tx.send(panel.state().clone());
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Panel fell behind analysis notifications");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            // The deadline argument must stay valid even while the branch
            // is disabled, hence the now() placeholder.
            _ = tokio::time::sleep_until(panel.reveal_at().unwrap_or_else(Instant::now)),
                if panel.reveal_at().is_some() =>
            {
                panel.reveal();
                let _ = state_tx.send(panel.state().clone());
            }
        }
    }

    tracing::debug!("Intent panel task stopped");
}
