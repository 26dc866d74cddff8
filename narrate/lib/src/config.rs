//! Run configuration.

use std::path::PathBuf;

use crate::voice::LanguageCode;

/// Sample rate of Kokoro output and of the written WAV file.
pub const SAMPLE_RATE: u32 = 24_000;

/// Directory, relative to the working directory, where audio is saved.
pub const DEFAULT_OUTPUT_DIR: &str = "audio_output";

/// Chunk delimiter: one or more newlines.
pub const DEFAULT_SPLIT_PATTERN: &str = r"\n+";

/// Configuration for a narration run.
///
/// Only the output directory and the language can be changed. Speed and
/// the split pattern are fixed, and files are always written at
/// [`SAMPLE_RATE`].
///
/// ## Examples
///
/// ```
/// use narrate_lib::{LanguageCode, NarrateConfig};
///
/// let config = NarrateConfig::new()
///     .with_output_dir("renders")
///     .with_language(LanguageCode::BritishEnglish);
/// assert_eq!(config.output_dir.to_str(), Some("renders"));
/// assert_eq!(config.language, LanguageCode::BritishEnglish);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NarrateConfig {
    /// Directory the WAV file is written to.
    pub output_dir: PathBuf,
    /// Language the engine is configured for.
    pub language: LanguageCode,
    /// Speech rate multiplier.
    pub(crate) speed: f32,
    /// Regular expression used to split text into chunks.
    pub(crate) split_pattern: String,
}

impl Default for NarrateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: LanguageCode::default(),
            speed: 1.0,
            split_pattern: DEFAULT_SPLIT_PATTERN.to_string(),
        }
    }
}

impl NarrateConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the engine language.
    #[must_use]
    pub fn with_language(mut self, language: LanguageCode) -> Self {
        self.language = language;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_kokoro_pipeline_settings() {
        let config = NarrateConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("audio_output"));
        assert_eq!(config.language, LanguageCode::AmericanEnglish);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.split_pattern, r"\n+");
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = NarrateConfig::new()
            .with_output_dir("out")
            .with_language(LanguageCode::Japanese);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.language, LanguageCode::Japanese);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.split_pattern, DEFAULT_SPLIT_PATTERN);
    }
}
