//! HTTP client backend for a remote intent-inference service.

use crate::{
    AnalysisResult, AudioClip, Entity, EntityKind, IntentKind, IntentRecognizer, RecognizerConfig,
    RecognizerError, RecognizerMetadata, Result,
};
use async_trait::async_trait;

pub struct RemoteRecognizer {
    endpoint: String,
    min_clip_ms: u64,
    client: reqwest::Client,
}

impl RemoteRecognizer {
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| "http://127.0.0.1:9009/analyze".to_string());
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RecognizerError::ServiceUnavailable(format!("HTTP client setup: {e}")))?;
        Ok(Self {
            endpoint,
            min_clip_ms: config.min_clip_ms,
            client,
        })
    }

    fn validate(&self, clip: &AudioClip) -> Result<()> {
        if clip.sample_rate_hz == 0 {
            return Err(RecognizerError::UnsupportedFormat(
                "sample rate is zero".to_string(),
            ));
        }
        if clip.pcm_s16le.is_empty() {
            return Err(RecognizerError::UnsupportedFormat(
                "clip has no samples".to_string(),
            ));
        }
        let got_ms = clip.duration_ms();
        if got_ms < self.min_clip_ms {
            return Err(RecognizerError::AudioTooShort {
                got_ms,
                min_ms: self.min_clip_ms,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl IntentRecognizer for RemoteRecognizer {
    async fn analyze(&self, clip: &AudioClip) -> Result<AnalysisResult> {
        self.validate(clip)?;

        #[derive(serde::Serialize)]
        struct ClipReq<'a> {
            sample_rate_hz: u32,
            duration_ms: u64,
            pcm_s16le: &'a [i16],
        }

        let req = ClipReq {
            sample_rate_hz: clip.sample_rate_hz,
            duration_ms: clip.duration_ms(),
            pcm_s16le: &clip.pcm_s16le,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&req)
            .send()
            .await
            .map_err(|e| RecognizerError::ServiceUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(RecognizerError::ServiceUnavailable(format!(
                "HTTP {}",
                resp.status()
            )));
        }

        // Expected response: { intent, confidence, transcript?, entities? }
        #[derive(serde::Deserialize)]
        struct EntityResp {
            #[serde(rename = "type")]
            kind: String,
            value: String,
        }
        #[derive(serde::Deserialize)]
        struct RespBody {
            intent: String,
            confidence: f32,
            transcript: Option<String>,
            entities: Option<Vec<EntityResp>>,
        }

        let body: RespBody = resp
            .json()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;

        let intent = IntentKind::parse(&body.intent).ok_or_else(|| {
            RecognizerError::InvalidResponse(format!("unknown intent: {}", body.intent))
        })?;

        let mut entities = Vec::new();
        for e in body.entities.unwrap_or_default() {
            match EntityKind::parse(&e.kind) {
                Some(kind) => entities.push(Entity::new(kind, e.value)),
                None => tracing::warn!("unknown entity type from server: {}", e.kind),
            }
        }

        Ok(AnalysisResult {
            intent,
            confidence: body.confidence.clamp(0.0, 1.0),
            transcript: body.transcript.unwrap_or_default(),
            entities,
        })
    }

    fn metadata(&self) -> RecognizerMetadata {
        RecognizerMetadata {
            name: "Remote Model Recognizer".to_string(),
            version: "0.1.0".to_string(),
            backend: "remote".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> RemoteRecognizer {
        RemoteRecognizer::new(&RecognizerConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_empty_clip() {
        let err = remote()
            .validate(&AudioClip::new(Vec::new(), 16_000))
            .unwrap_err();
        assert!(matches!(err, RecognizerError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let err = remote()
            .validate(&AudioClip::new(vec![0; 1000], 0))
            .unwrap_err();
        assert!(matches!(err, RecognizerError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_short_clip() {
        // 100ms at 16kHz.
        let err = remote()
            .validate(&AudioClip::new(vec![0; 1_600], 16_000))
            .unwrap_err();
        assert!(matches!(
            err,
            RecognizerError::AudioTooShort {
                got_ms: 100,
                min_ms: 500
            }
        ));
    }

    #[test]
    fn test_accepts_clip_at_minimum_length() {
        // Exactly 500ms at 16kHz.
        let clip = AudioClip::new(vec![0; 8_000], 16_000);
        assert!(remote().validate(&clip).is_ok());
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(remote().endpoint, "http://127.0.0.1:9009/analyze");
    }

    #[test]
    fn test_endpoint_override_from_config() {
        let config = RecognizerConfig {
            endpoint: Some("http://10.0.0.5:8080/intent".to_string()),
            ..Default::default()
        };
        let remote = RemoteRecognizer::new(&config).unwrap();
        assert_eq!(remote.endpoint, "http://10.0.0.5:8080/intent");
    }

    #[tokio::test]
    async fn test_unreachable_service_surfaces_as_error() {
        let config = RecognizerConfig {
            endpoint: Some("http://127.0.0.1:1/analyze".to_string()),
            ..Default::default()
        };
        let remote = RemoteRecognizer::new(&config).unwrap();
        let clip = AudioClip::new(vec![0; 48_000], 16_000);

        let err = remote.analyze(&clip).await.unwrap_err();
        assert!(matches!(
            err,
            RecognizerError::ServiceUnavailable(_) | RecognizerError::InvalidResponse(_)
        ));
    }
}
