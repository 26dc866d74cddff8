//! Core data types passed between pipeline stages.

use crate::config::NarrateConfig;
use crate::voice::Voice;

/// A validated request for the synthesis engine.
///
/// Built once per run by [`validate`](fn@crate::validate) and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    text: String,
    voice: Voice,
    speed: f32,
    split_pattern: String,
}

impl SynthesisRequest {
    pub(crate) fn new(text: String, voice: Voice, config: &NarrateConfig) -> Self {
        Self {
            text,
            voice,
            speed: config.speed,
            split_pattern: config.split_pattern.clone(),
        }
    }

    /// Text to synthesize.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected voice.
    pub fn voice(&self) -> Voice {
        self.voice
    }

    /// Speech rate multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Regular expression separating chunks.
    pub fn split_pattern(&self) -> &str {
        &self.split_pattern
    }
}

/// One synthesized chunk of text.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSegment {
    /// The chunk of input text.
    pub graphemes: String,
    /// Phonetic transcription of the chunk.
    pub phonemes: String,
    /// Mono waveform in [-1.0, 1.0].
    pub samples: Vec<f32>,
}

/// Everything the user supplied, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedInput {
    /// Base name of the output file, without extension.
    pub audio_name: String,
    /// Resolved voice, if any.
    pub voice: Option<Voice>,
    /// Text to synthesize.
    pub text: String,
}
