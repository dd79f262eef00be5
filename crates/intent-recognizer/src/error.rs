use thiserror::Error;

pub type Result<T, E = RecognizerError> = core::result::Result<T, E>;

/// Failure kinds the recognizer layer can surface.
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("audio clip too short: {got_ms}ms (minimum {min_ms}ms)")]
    AudioTooShort { got_ms: u64, min_ms: u64 },
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("inference timed out after {waited_ms}ms")]
    InferenceTimeout { waited_ms: u64 },
    #[error("inference service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("invalid inference response: {0}")]
    InvalidResponse(String),
    #[error("unsupported recognizer backend: {0}")]
    UnsupportedBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_audio_too_short() {
        let err = RecognizerError::AudioTooShort {
            got_ms: 120,
            min_ms: 500,
        };
        assert_eq!(err.to_string(), "audio clip too short: 120ms (minimum 500ms)");
    }

    #[test]
    fn test_error_display_timeout() {
        let err = RecognizerError::InferenceTimeout { waited_ms: 2500 };
        assert_eq!(err.to_string(), "inference timed out after 2500ms");
    }

    #[test]
    fn test_error_display_unavailable() {
        let err = RecognizerError::ServiceUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_display_unsupported_backend() {
        let err = RecognizerError::UnsupportedBackend("onnx".to_string());
        assert_eq!(err.to_string(), "unsupported recognizer backend: onnx");
    }
}
