use serde::{Deserialize, Serialize};

/// An in-memory audio clip, S16LE mono.
///
/// Backends treat the payload as opaque: the mock backend ignores the
/// samples entirely, and the remote backend only inspects enough of
/// the shape to validate the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    pub pcm_s16le: Vec<i16>,
    pub sample_rate_hz: u32,
}

impl AudioClip {
    pub fn new(pcm_s16le: Vec<i16>, sample_rate_hz: u32) -> Self {
        Self {
            pcm_s16le,
            sample_rate_hz,
        }
    }

    /// Clip duration in milliseconds; zero when the sample rate is unset.
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate_hz == 0 {
            return 0;
        }
        self.pcm_s16le.len() as u64 * 1000 / self.sample_rate_hz as u64
    }
}
