//! Error types for the narrate library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while collecting input from the console.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while a prompt still needed an answer.
    #[error("input closed while waiting for {prompt}")]
    InputClosed {
        /// What the prompt was asking for.
        prompt: &'static str,
    },
}

/// A `--lang` value that is not a Kokoro language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{0}' (expected one of a, b, e, f, h, i, j, p, z)")]
pub struct UnknownLanguageCode(pub String);

/// Errors raised while reading text from a file.
///
/// These never escape the collector: they are reported and the user is
/// sent back to the mode prompt.
#[derive(Debug, Error)]
pub enum FileReadError {
    /// The file does not exist.
    #[error("Error: File not found at path: {}", path.display())]
    NotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("Error reading file: {source}")]
    Unreadable {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by a synthesis engine.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The split pattern is not a valid regular expression.
    #[error("invalid split pattern: {0}")]
    InvalidSplitPattern(#[from] regex::Error),

    /// Failed to create scratch files for the engine.
    #[error("failed to create temp file: {source}")]
    TempFileError {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The engine process could not be started.
    #[error("{engine} failed to start: {source}")]
    ProcessSpawnFailed {
        /// Engine binary name.
        engine: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The engine process exited with a non-zero status.
    #[error("{engine} failed: {output}")]
    ProcessFailed {
        /// Engine binary name.
        engine: String,
        /// Captured error output.
        output: String,
    },

    /// The engine produced audio that could not be decoded.
    #[error("failed to decode engine audio: {0}")]
    Decode(#[from] hound::Error),

    /// The engine produced audio at an unexpected sample rate.
    #[error("engine produced {actual} Hz audio, expected {expected} Hz")]
    SampleRateMismatch {
        /// The rate the writer expects.
        expected: u32,
        /// The rate the engine produced.
        actual: u32,
    },

    /// The text split into zero synthesizable chunks.
    #[error("no audio segments were produced")]
    NoSegments,

    /// Other I/O failure while driving the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from running eSpeak to transcribe a chunk.
///
/// The phonemizer logs these and falls back to an empty transcription.
#[derive(Debug, Error)]
pub enum PhonemizeError {
    /// The eSpeak process could not be started.
    #[error("{binary} failed to start: {source}")]
    Spawn {
        /// Binary name.
        binary: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the text to eSpeak's stdin failed.
    #[error("failed to write to phonemizer stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Waiting for the eSpeak process failed.
    #[error("failed to wait for phonemizer: {0}")]
    Wait(#[source] std::io::Error),

    /// eSpeak exited with a non-zero status.
    #[error("phonemizer failed: {stderr}")]
    Failed {
        /// Captured stderr.
        stderr: String,
    },
}

/// Errors raised while persisting the combined audio.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", dir.display())]
    CreateDir {
        /// The directory that was requested.
        dir: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing the WAV data failed.
    #[error("failed to write WAV data: {0}")]
    Encode(#[from] hound::Error),

    /// Creating or renaming the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Persist {
        /// The final output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for a narration run.
///
/// Validation rejections and write failures are not errors; they end the
/// run with a reported [`RunOutcome`](crate::RunOutcome).
#[derive(Debug, Error)]
pub enum NarrateError {
    /// Input collection failed.
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// The synthesis engine failed.
    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Writing progress to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_message_names_path() {
        let err = FileReadError::NotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.to_string(), "Error: File not found at path: missing.txt");
    }

    #[test]
    fn synthesis_error_wraps_into_narrate_error() {
        let err: NarrateError = SynthesisError::NoSegments.into();
        assert!(matches!(err, NarrateError::Synthesis(SynthesisError::NoSegments)));
        assert!(err.to_string().contains("no audio segments"));
    }
}
