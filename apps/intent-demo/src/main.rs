//! Audio Intent Recognition Demo Application
//!
//! Demonstrates the full pipeline: synthetic audio clip → recognizer →
//! notification → delayed reveal on the intent panel, next to the seeded
//! recent-activity history.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use intent_panels::{
    render_activity_panel, render_intent_panel, run_intent_panel, ActivityLog, DisplayState,
};
use intent_recognizer::{
    analyze_with_timeout, create_recognizer, AnalysisResult, AudioClip, IntentRecognizer,
    RecognizerConfig,
};

#[derive(Parser)]
#[command(name = "intent-demo")]
#[command(about = "EchoSense Audio Intent Recognition Demo")]
struct Args {
    /// Recognizer backend ("mock", or "remote" with the remote feature)
    #[arg(long, default_value = "mock")]
    backend: String,

    /// Remote inference endpoint (remote backend only)
    #[arg(long)]
    endpoint: Option<String>,

    /// Number of canned analyses to run
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Interactive mode (press Enter to analyze, 'quit' to exit)
    #[arg(long)]
    interactive: bool,

    /// Simulated processing delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Panel reveal delay in milliseconds
    #[arg(long, default_value_t = 1000)]
    reveal_ms: u64,

    /// Analysis timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let args = Args::parse();

    info!("🎤 Starting EchoSense Intent Recognition Demo");

    intent_recognizer::init()?;

    let config = RecognizerConfig {
        backend: args.backend.clone(),
        processing_delay_ms: args.delay_ms,
        endpoint: args.endpoint.clone(),
        request_timeout_ms: args.timeout_ms,
        ..RecognizerConfig::default()
    };
    let recognizer = create_recognizer(&config)?;
    let meta = recognizer.metadata();
    info!(backend = %meta.backend, model = %meta.name, "Recognizer ready");

    // The activity history is seeded display data, disconnected from
    // the live pipeline.
    println!("{}", render_activity_panel(&ActivityLog::seeded()));
    println!("{}", render_intent_panel(&DisplayState::Idle));

    let (notify_tx, notify_rx) = broadcast::channel(16);
    let (state_tx, state_rx) = watch::channel(DisplayState::Idle);

    let panel_task = tokio::spawn(run_intent_panel(
        notify_rx,
        state_tx,
        Duration::from_millis(args.reveal_ms),
    ));
    let printer_task = tokio::spawn(print_state_changes(state_rx));

    let timeout = Duration::from_millis(config.request_timeout_ms);
    if args.interactive {
        run_interactive(recognizer.as_ref(), &notify_tx, timeout, args.reveal_ms).await?;
    } else {
        run_canned(recognizer.as_ref(), &notify_tx, timeout, &args).await;
    }

    // Closing the notification channel stops the panel task, which in
    // turn ends the printer.
    drop(notify_tx);
    panel_task.await?;
    printer_task.await?;

    info!("✅ Intent demo completed");
    Ok(())
}

async fn print_state_changes(mut state_rx: watch::Receiver<DisplayState>) {
    while state_rx.changed().await.is_ok() {
        let state = state_rx.borrow_and_update().clone();
        println!("{}", render_intent_panel(&state));
    }
}

async fn run_canned(
    recognizer: &dyn IntentRecognizer,
    notify_tx: &broadcast::Sender<AnalysisResult>,
    timeout: Duration,
    args: &Args,
) {
    println!("🎯 Running {} canned analyses", args.count);
    println!();

    for i in 0..args.count {
        println!("{}/{}: capturing a fresh 3-second clip", i + 1, args.count);
        trigger_analysis(recognizer, notify_tx, timeout).await;

        // Let the reveal land before the next capture.
        tokio::time::sleep(Duration::from_millis(args.reveal_ms + 500)).await;
    }

    println!("🎉 Demo completed! All clips analyzed.");
}

async fn run_interactive(
    recognizer: &dyn IntentRecognizer,
    notify_tx: &broadcast::Sender<AnalysisResult>,
    timeout: Duration,
    reveal_ms: u64,
) -> Result<()> {
    println!("🎤 Interactive Intent Demo");
    println!("Press Enter to analyze a fresh clip (or 'quit' to exit):");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("🎤 Ready: ");
        stdout.flush()?;

        let mut input = String::new();
        stdin.read_line(&mut input)?;
        let command = input.trim();

        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("exit") {
            break;
        }

        trigger_analysis(recognizer, notify_tx, timeout).await;
        tokio::time::sleep(Duration::from_millis(reveal_ms + 500)).await;
    }

    Ok(())
}

/// Analyze one synthetic clip and notify the panel with the outcome.
///
/// Failures are folded into an error result so they travel the same
/// display path as successful analyses.
async fn trigger_analysis(
    recognizer: &dyn IntentRecognizer,
    notify_tx: &broadcast::Sender<AnalysisResult>,
    timeout: Duration,
) {
    let clip = synthesize_demo_clip();
    info!(clip_ms = clip.duration_ms(), "🎙️ Captured demo clip");

    let result = match analyze_with_timeout(recognizer, &clip, timeout).await {
        Ok(result) => {
            info!(
                intent = %result.intent,
                confidence = result.confidence,
                "Analysis finished"
            );
            result
        }
        Err(e) => {
            warn!("⚠️ Analysis failed: {}", e);
            AnalysisResult::failure(e.to_string())
        }
    };

    let _ = notify_tx.send(result);
}

/// Produce a 3-second 440Hz sine placeholder in S16LE, standing in for a
/// microphone capture.
fn synthesize_demo_clip() -> AudioClip {
    let sample_rate_hz = 16_000u32;
    let frames = (sample_rate_hz * 3) as usize;
    let mut pcm = Vec::with_capacity(frames);
    let freq = 440.0_f32;
    for n in 0..frames {
        let t = n as f32 / sample_rate_hz as f32;
        let s = (2.0 * std::f32::consts::PI * freq * t).sin();
        pcm.push((s * 3000.0) as i16);
    }
    AudioClip::new(pcm, sample_rate_hz)
}

fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
