//! intent-recognizer: speaker intent classification for short audio clips
//!
//! This crate provides the recognizer trait, a mock backend that produces
//! plausible canned analyses for demos, and an HTTP client backend for a
//! remote inference service.

mod audio;
pub use audio::AudioClip;

mod error;
pub use error::{RecognizerError, Result};

mod types;
pub use types::{
    AnalysisResult, Entity, EntityKind, IntentKind, RecognizerConfig, RecognizerMetadata,
};

mod traits;
pub use traits::{analyze_with_timeout, IntentRecognizer};

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "remote-http")]
pub mod remote;

/// Initialize the intent recognition system
pub fn init() -> Result<()> {
    tracing::info!("Initializing intent recognition system");
    Ok(())
}

/// Create a recognizer instance based on configuration
pub fn create_recognizer(
    config: &RecognizerConfig,
) -> Result<std::sync::Arc<dyn IntentRecognizer>> {
    match config.backend.as_str() {
        #[cfg(feature = "mock")]
        "mock" => Ok(std::sync::Arc::new(mock::MockRecognizer::new(config))),
        #[cfg(feature = "remote-http")]
        "remote" => {
            let recognizer = remote::RemoteRecognizer::new(config)?;
            Ok(std::sync::Arc::new(recognizer))
        }
        other => Err(RecognizerError::UnsupportedBackend(other.to_string())),
    }
}

/// One-shot mock analysis with the default configuration.
#[cfg(feature = "mock")]
pub async fn analyze_audio(clip: &AudioClip) -> Result<AnalysisResult> {
    let recognizer = mock::MockRecognizer::new(&RecognizerConfig::default());
    recognizer.analyze(clip).await
}
