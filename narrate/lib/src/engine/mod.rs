//! Synthesis engines.
//!
//! An engine turns a [`SynthesisRequest`] into a lazy sequence of
//! [`SynthesisSegment`]s, one per text chunk, in chunk order. Nothing is
//! synthesized until the caller pulls the next segment.
//!
//! - [`KokoroEngine`] - drives the `kokoro-tts` CLI
//! - [`Phonemizer`] - eSpeak-based phonetic transcription for segments

mod kokoro;
mod phonemes;

pub use kokoro::KokoroEngine;
pub use phonemes::Phonemizer;

use regex::Regex;

use crate::error::SynthesisError;
use crate::types::{SynthesisRequest, SynthesisSegment};

/// Lazy, finite, non-restartable sequence of synthesized segments.
pub type Segments<'a> = Box<dyn Iterator<Item = Result<SynthesisSegment, SynthesisError>> + 'a>;

/// A text-to-speech engine.
///
/// ## Examples
///
/// ```
/// use narrate_lib::engine::{split_chunks, Segments, SynthesisEngine};
/// use narrate_lib::{SynthesisError, SynthesisRequest, SynthesisSegment};
///
/// struct Silence;
///
/// impl SynthesisEngine for Silence {
///     fn synthesize<'a>(&'a self, request: &'a SynthesisRequest) -> Result<Segments<'a>, SynthesisError> {
///         let chunks = split_chunks(request.text(), request.split_pattern())?;
///         Ok(Box::new(chunks.into_iter().map(|graphemes| {
///             Ok::<_, SynthesisError>(SynthesisSegment { graphemes, phonemes: String::new(), samples: vec![0.0; 240] })
///         })))
///     }
/// }
/// ```
pub trait SynthesisEngine {
    /// Start synthesizing `request`.
    ///
    /// ## Errors
    ///
    /// Returns `SynthesisError` if the request cannot be started (e.g. an
    /// invalid split pattern). Per-chunk failures are yielded by the
    /// iterator.
    fn synthesize<'a>(&'a self, request: &'a SynthesisRequest)
        -> Result<Segments<'a>, SynthesisError>;

    /// Whether the engine's external dependencies are present.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Split `text` on `pattern`, trimming chunks and dropping empty ones.
///
/// ## Examples
///
/// ```
/// use narrate_lib::engine::split_chunks;
///
/// let chunks = split_chunks("Line one\n\nLine two", r"\n+").unwrap();
/// assert_eq!(chunks, vec!["Line one", "Line two"]);
/// ```
pub fn split_chunks(text: &str, pattern: &str) -> Result<Vec<String>, SynthesisError> {
    let re = Regex::new(pattern)?;
    Ok(re
        .split(text.trim())
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_newlines() {
        let chunks = split_chunks("a\nb\n\n\nc", r"\n+").unwrap();
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_whitespace_only_chunks() {
        let chunks = split_chunks("\n  \nHello\n \t \nworld\n", r"\n+").unwrap();
        assert_eq!(chunks, vec!["Hello", "world"]);
    }

    #[test]
    fn single_line_is_one_chunk() {
        let chunks = split_chunks("Hello world", r"\n+").unwrap();
        assert_eq!(chunks, vec!["Hello world"]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = split_chunks("text", "(").unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidSplitPattern(_)));
    }
}
