//! Validation of collected input.

use thiserror::Error;

use crate::config::NarrateConfig;
use crate::types::{CollectedInput, SynthesisRequest};
use crate::voice::{LanguageCode, Voice};

/// Why a run was rejected before synthesis.
///
/// The `Display` text is exactly what the user is shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The output name was empty.
    #[error("Error: Audio name cannot be empty.")]
    EmptyName,

    /// The text was empty or whitespace-only.
    #[error("Error: Text input cannot be empty.")]
    EmptyText,

    /// No voice was resolved.
    #[error("Error: Voice must be selected.")]
    NoVoice,

    /// The voice belongs to a different language than the engine.
    #[error("Error: Voice {voice} does not match engine language '{engine}'.")]
    LanguageMismatch {
        /// The selected voice.
        voice: Voice,
        /// The language the engine is configured for.
        engine: LanguageCode,
    },
}

/// Turn collected input into a synthesis request.
///
/// Checks run in a fixed order (name, text, voice, language) and the first
/// failure wins.
pub fn validate(
    input: CollectedInput,
    config: &NarrateConfig,
) -> Result<SynthesisRequest, Rejection> {
    if input.audio_name.is_empty() {
        return Err(Rejection::EmptyName);
    }
    if input.text.trim().is_empty() {
        return Err(Rejection::EmptyText);
    }
    let voice = input.voice.ok_or(Rejection::NoVoice)?;

    // Unknown prefixes are let through; only a known, different language is
    // a guaranteed mismatch.
    if let Some(lang) = voice.language()
        && lang != config.language
    {
        return Err(Rejection::LanguageMismatch {
            voice,
            engine: config.language,
        });
    }

    Ok(SynthesisRequest::new(input.text, voice, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, voice: Option<&'static str>, text: &str) -> CollectedInput {
        CollectedInput {
            audio_name: name.to_string(),
            voice: voice.map(Voice::new),
            text: text.to_string(),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let config = NarrateConfig::default();
        let request = validate(input("test", Some("af_heart"), "Hello world"), &config).unwrap();
        assert_eq!(request.text(), "Hello world");
        assert_eq!(request.voice().id(), "af_heart");
        assert_eq!(request.speed(), 1.0);
        assert_eq!(request.split_pattern(), r"\n+");
    }

    #[test]
    fn rejects_empty_name_even_with_valid_text_and_voice() {
        let config = NarrateConfig::default();
        let err = validate(input("", Some("af_heart"), "Hello"), &config).unwrap_err();
        assert_eq!(err, Rejection::EmptyName);
        assert_eq!(err.to_string(), "Error: Audio name cannot be empty.");
    }

    #[test]
    fn rejects_whitespace_only_text() {
        let config = NarrateConfig::default();
        let err = validate(input("test", Some("af_heart"), "   "), &config).unwrap_err();
        assert_eq!(err, Rejection::EmptyText);

        let err = validate(input("test", Some("af_heart"), ""), &config).unwrap_err();
        assert_eq!(err, Rejection::EmptyText);
    }

    #[test]
    fn rejects_missing_voice() {
        let config = NarrateConfig::default();
        let err = validate(input("test", None, "Hello"), &config).unwrap_err();
        assert_eq!(err, Rejection::NoVoice);
    }

    #[test]
    fn name_is_checked_before_text() {
        let config = NarrateConfig::default();
        let err = validate(input("", None, ""), &config).unwrap_err();
        assert_eq!(err, Rejection::EmptyName);
    }

    #[test]
    fn rejects_voice_from_another_language() {
        let config = NarrateConfig::default();
        let err = validate(input("test", Some("bf_emma"), "Hello"), &config).unwrap_err();
        assert!(matches!(err, Rejection::LanguageMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "Error: Voice bf_emma does not match engine language 'a'."
        );
    }

    #[test]
    fn accepts_voice_matching_configured_language() {
        let config = NarrateConfig::new().with_language(LanguageCode::BritishEnglish);
        assert!(validate(input("test", Some("bf_emma"), "Hello"), &config).is_ok());
    }

    #[test]
    fn rejections_are_errors_with_user_facing_messages() {
        let cases: [(Rejection, &str); 3] = [
            (Rejection::EmptyName, "Error: Audio name cannot be empty."),
            (Rejection::EmptyText, "Error: Text input cannot be empty."),
            (Rejection::NoVoice, "Error: Voice must be selected."),
        ];
        for (rejection, message) in cases {
            let err: Box<dyn std::error::Error> = Box::new(rejection);
            assert_eq!(err.to_string(), message);
            assert!(err.source().is_none());
        }
    }

    #[test]
    fn unknown_voice_prefix_is_not_rejected() {
        let config = NarrateConfig::default();
        assert!(validate(input("test", Some("xx_custom"), "Hello"), &config).is_ok());
    }
}
