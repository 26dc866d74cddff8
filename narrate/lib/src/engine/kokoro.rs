//! Kokoro engine.
//!
//! Uses the `kokoro-tts` CLI tool to run the Kokoro-82M model, one process
//! per text chunk.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use super::{Phonemizer, Segments, SynthesisEngine, split_chunks};
use crate::audio;
use crate::config::SAMPLE_RATE;
use crate::error::SynthesisError;
use crate::types::{SynthesisRequest, SynthesisSegment};
use crate::voice::{LanguageCode, Voice};

/// Kokoro synthesis engine.
///
/// ## Model Requirements
///
/// Kokoro TTS requires two model files:
/// - `kokoro-v1.0.onnx` - The ONNX model
/// - `voices-v1.0.bin` - Voice embeddings
///
/// `kokoro-tts` finds them in its working directory unless `KOKORO_MODEL`
/// and `KOKORO_VOICES` (or [`KokoroEngine::with_paths`]) point elsewhere.
///
/// ## Examples
///
/// ```no_run
/// use narrate_lib::engine::KokoroEngine;
/// use narrate_lib::LanguageCode;
///
/// let engine = KokoroEngine::new(LanguageCode::AmericanEnglish);
/// ```
#[derive(Debug, Clone)]
pub struct KokoroEngine {
    language: LanguageCode,
    binary: String,
    /// Custom path to the model file.
    model_path: Option<String>,
    /// Custom path to the voices file.
    voices_path: Option<String>,
    phonemizer: Phonemizer,
}

impl KokoroEngine {
    /// Engine binary name, also used in error messages.
    const BINARY: &'static str = "kokoro-tts";

    /// Create an engine fixed to `language`.
    ///
    /// Checks for `KOKORO_MODEL` and `KOKORO_VOICES` environment variables
    /// for custom model paths.
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            binary: Self::BINARY.to_string(),
            model_path: std::env::var("KOKORO_MODEL").ok(),
            voices_path: std::env::var("KOKORO_VOICES").ok(),
            phonemizer: Phonemizer::new(),
        }
    }

    /// Use custom model and voices file paths.
    #[must_use]
    pub fn with_paths(mut self, model_path: impl Into<String>, voices_path: impl Into<String>) -> Self {
        self.model_path = Some(model_path.into());
        self.voices_path = Some(voices_path.into());
        self
    }

    /// Run a different `kokoro-tts` compatible binary.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Replace the phonemizer.
    #[must_use]
    pub fn with_phonemizer(mut self, phonemizer: Phonemizer) -> Self {
        self.phonemizer = phonemizer;
        self
    }

    fn build_command(&self, input: &Path, output: &Path, voice: Voice, speed: f32) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(input);
        cmd.arg(output);
        cmd.arg("--voice").arg(voice.id());
        cmd.arg("--speed").arg(speed.to_string());
        cmd.arg("--lang").arg(self.language.kokoro_lang());
        cmd.arg("--format").arg("wav");

        if let Some(model_path) = &self.model_path {
            cmd.arg("--model").arg(model_path);
        }
        if let Some(voices_path) = &self.voices_path {
            cmd.arg("--voices").arg(voices_path);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    /// Synthesize one chunk and return its mono samples.
    fn synthesize_chunk(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<f32>, SynthesisError> {
        // A fresh directory per chunk: kokoro-tts refuses some pre-existing
        // output files.
        let temp_dir = tempfile::tempdir().map_err(|source| SynthesisError::TempFileError { source })?;
        let input_path = temp_dir.path().join("input.txt");
        let output_path = temp_dir.path().join("output.wav");
        std::fs::write(&input_path, text)?;

        debug!(
            engine = %self.binary,
            voice = %voice,
            lang = self.language.kokoro_lang(),
            "Running kokoro-tts"
        );

        let output = self
            .build_command(&input_path, &output_path, voice, speed)
            .output()
            .map_err(|source| SynthesisError::ProcessSpawnFailed {
                engine: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            // kokoro-tts writes errors to stdout, not stderr
            let error_output = if output.stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                String::from_utf8_lossy(&output.stderr).trim().to_string()
            };
            return Err(SynthesisError::ProcessFailed {
                engine: self.binary.clone(),
                output: error_output,
            });
        }

        let wav = audio::read_wav(&output_path)?;
        if wav.sample_rate != SAMPLE_RATE {
            return Err(SynthesisError::SampleRateMismatch {
                expected: SAMPLE_RATE,
                actual: wav.sample_rate,
            });
        }
        Ok(wav.samples)
    }
}

impl SynthesisEngine for KokoroEngine {
    fn synthesize<'a>(&'a self, request: &'a SynthesisRequest) -> Result<Segments<'a>, SynthesisError> {
        let chunks = split_chunks(request.text(), request.split_pattern())?;
        info!(
            voice = %request.voice(),
            chunks = chunks.len(),
            "Starting Kokoro synthesis"
        );

        let segment = move |graphemes: String| -> Result<SynthesisSegment, SynthesisError> {
            let samples = self.synthesize_chunk(&graphemes, request.voice(), request.speed())?;
            let phonemes = self.phonemizer.phonemize(&graphemes, self.language);
            Ok(SynthesisSegment {
                graphemes,
                phonemes,
                samples,
            })
        };
        Ok(Box::new(chunks.into_iter().map(segment)))
    }

    fn is_ready(&self) -> bool {
        which::which(&self.binary).is_ok()
    }
}
