use crate::{AnalysisResult, AudioClip, RecognizerError, RecognizerMetadata, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Core capability shared by mock and real inference backends.
#[async_trait]
pub trait IntentRecognizer: Send + Sync {
    /// Analyze one audio clip and classify the speaker's intent.
    async fn analyze(&self, clip: &AudioClip) -> Result<AnalysisResult>;

    /// Get backend metadata
    fn metadata(&self) -> RecognizerMetadata;
}

/// Run an analysis with an upper bound on how long it may take.
///
/// Expiry maps to [`RecognizerError::InferenceTimeout`]. Dropping the
/// returned future cancels the in-flight request.
pub async fn analyze_with_timeout(
    recognizer: &dyn IntentRecognizer,
    clip: &AudioClip,
    timeout: Duration,
) -> Result<AnalysisResult> {
    match tokio::time::timeout(timeout, recognizer.analyze(clip)).await {
        Ok(result) => result,
        Err(_) => Err(RecognizerError::InferenceTimeout {
            waited_ms: timeout.as_millis() as u64,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntentKind;

    struct SlowRecognizer;

    #[async_trait]
    impl IntentRecognizer for SlowRecognizer {
        async fn analyze(&self, _clip: &AudioClip) -> Result<AnalysisResult> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(AnalysisResult {
                intent: IntentKind::Statement,
                confidence: 0.9,
                transcript: "too late".to_string(),
                entities: Vec::new(),
            })
        }

        fn metadata(&self) -> RecognizerMetadata {
            RecognizerMetadata {
                name: "Slow Recognizer".to_string(),
                version: "0.0.0".to_string(),
                backend: "slow".to_string(),
            }
        }
    }

    struct InstantRecognizer;

    #[async_trait]
    impl IntentRecognizer for InstantRecognizer {
        async fn analyze(&self, _clip: &AudioClip) -> Result<AnalysisResult> {
            Ok(AnalysisResult {
                intent: IntentKind::Question,
                confidence: 0.8,
                transcript: "on time".to_string(),
                entities: Vec::new(),
            })
        }

        fn metadata(&self) -> RecognizerMetadata {
            RecognizerMetadata {
                name: "Instant Recognizer".to_string(),
                version: "0.0.0".to_string(),
                backend: "instant".to_string(),
            }
        }
    }

    fn test_clip() -> AudioClip {
        AudioClip::new(vec![0; 16_000], 16_000)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_expiry_maps_to_inference_timeout() {
        let err = analyze_with_timeout(&SlowRecognizer, &test_clip(), Duration::from_millis(250))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RecognizerError::InferenceTimeout { waited_ms: 250 }
        ));
    }

    #[tokio::test]
    async fn test_timeout_passes_through_fast_results() {
        let result =
            analyze_with_timeout(&InstantRecognizer, &test_clip(), Duration::from_secs(5))
                .await
                .unwrap();
        assert_eq!(result.intent, IntentKind::Question);
        assert_eq!(result.transcript, "on time");
    }
}
