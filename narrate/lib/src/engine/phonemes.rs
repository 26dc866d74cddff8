//! Phonetic transcription via eSpeak-NG.
//!
//! Kokoro's own G2P falls back to eSpeak for out-of-vocabulary words; we use
//! eSpeak's IPA output directly to report a phoneme sequence per chunk.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::PhonemizeError;
use crate::voice::LanguageCode;

/// Produces IPA phoneme strings for text chunks.
#[derive(Debug, Clone)]
pub struct Phonemizer {
    /// The binary to use (espeak-ng or espeak), if one was found.
    binary: Option<String>,
}

impl Default for Phonemizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Phonemizer {
    /// Detect `espeak-ng`, falling back to `espeak`.
    pub fn new() -> Self {
        let binary = ["espeak-ng", "espeak"]
            .into_iter()
            .find(|name| which::which(name).is_ok())
            .map(str::to_string);
        Self { binary }
    }

    /// Use a specific binary.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: Some(binary.into()),
        }
    }

    /// A phonemizer that always returns an empty transcription.
    pub fn disabled() -> Self {
        Self { binary: None }
    }

    /// Whether a phonemizer binary is configured.
    pub fn is_available(&self) -> bool {
        self.binary.is_some()
    }

    /// Transcribe `text` to IPA.
    ///
    /// Phonemes are informational only, so any failure yields an empty
    /// string instead of an error.
    pub fn phonemize(&self, text: &str, language: LanguageCode) -> String {
        let Some(binary) = &self.binary else {
            return String::new();
        };

        match run_espeak(binary, text, language) {
            Ok(phonemes) => phonemes,
            Err(err) => {
                debug!(binary = %binary, error = %err, "Phonemizer failed");
                String::new()
            }
        }
    }
}

fn run_espeak(binary: &str, text: &str, language: LanguageCode) -> Result<String, PhonemizeError> {
    let mut child = Command::new(binary)
        .args(["-q", "--ipa", "-v", language.espeak_voice()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| PhonemizeError::Spawn {
            binary: binary.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()) {
            Ok(()) => {}
            // Exited before reading; the exit status below reports why.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) => return Err(PhonemizeError::Stdin(e)),
        }
        // Close stdin so espeak sees EOF.
        drop(stdin);
    }

    let output = child.wait_with_output().map_err(PhonemizeError::Wait)?;
    if !output.status.success() {
        return Err(PhonemizeError::Failed {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(join_ipa_lines(&String::from_utf8_lossy(&output.stdout)))
}

/// eSpeak prints one line per clause; collapse them into one sequence.
fn join_ipa_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
