//! Kokoro voices and the language codes they belong to.
//!
//! Kokoro voice names follow a `[language][gender]_[name]` convention:
//! - First char: language code (a=American, b=British, j=Japanese, etc.)
//! - Second char: gender (f=Female, m=Male)
//!
//! Example: `af_heart` = American Female voice named "heart"

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownLanguageCode;

/// Language setting of a Kokoro pipeline.
///
/// The engine is configured with exactly one of these for its lifetime. A
/// voice only produces intelligible speech when its prefix matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    /// American English (`a`), the default.
    #[default]
    AmericanEnglish,
    /// British English (`b`).
    BritishEnglish,
    /// Spanish (`e`).
    Spanish,
    /// French (`f`).
    French,
    /// Hindi (`h`).
    Hindi,
    /// Italian (`i`).
    Italian,
    /// Japanese (`j`).
    Japanese,
    /// Brazilian Portuguese (`p`).
    BrazilianPortuguese,
    /// Mandarin Chinese (`z`).
    Mandarin,
}

impl LanguageCode {
    /// Parse the single-character Kokoro language code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'a' => Some(Self::AmericanEnglish),
            'b' => Some(Self::BritishEnglish),
            'e' => Some(Self::Spanish),
            'f' => Some(Self::French),
            'h' => Some(Self::Hindi),
            'i' => Some(Self::Italian),
            'j' => Some(Self::Japanese),
            'p' => Some(Self::BrazilianPortuguese),
            'z' => Some(Self::Mandarin),
            _ => None,
        }
    }

    /// The single-character Kokoro language code.
    pub fn code(self) -> char {
        match self {
            Self::AmericanEnglish => 'a',
            Self::BritishEnglish => 'b',
            Self::Spanish => 'e',
            Self::French => 'f',
            Self::Hindi => 'h',
            Self::Italian => 'i',
            Self::Japanese => 'j',
            Self::BrazilianPortuguese => 'p',
            Self::Mandarin => 'z',
        }
    }

    /// Value passed to `kokoro-tts --lang`.
    pub fn kokoro_lang(self) -> &'static str {
        match self {
            Self::AmericanEnglish => "en-us",
            Self::BritishEnglish => "en-gb",
            Self::Spanish => "es",
            Self::French => "fr-fr",
            Self::Hindi => "hi",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::BrazilianPortuguese => "pt-br",
            Self::Mandarin => "cmn",
        }
    }

    /// eSpeak voice used to phonemize text in this language.
    pub fn espeak_voice(self) -> &'static str {
        match self {
            Self::AmericanEnglish => "en-us",
            Self::BritishEnglish => "en-gb-x-rp",
            Self::Spanish => "es",
            Self::French => "fr-fr",
            Self::Hindi => "hi",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::BrazilianPortuguese => "pt-br",
            Self::Mandarin => "cmn",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses a single-character code such as `"b"`.
impl FromStr for LanguageCode {
    type Err = UnknownLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => None,
        };
        parsed.ok_or_else(|| UnknownLanguageCode(s.to_string()))
    }
}

/// A Kokoro voice identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Voice(&'static str);

impl Voice {
    /// Wrap a static voice identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The identifier passed to the engine (e.g. `af_heart`).
    pub fn id(&self) -> &'static str {
        self.0
    }

    /// Language implied by the first prefix character, if recognized.
    pub fn language(&self) -> Option<LanguageCode> {
        self.0.chars().next().and_then(LanguageCode::from_code)
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// American English voices offered by the prompt flow, in display order.
const AMERICAN_VOICES: &[&str] = &[
    "af_heart",
    "af_alloy",
    "af_aoede",
    "af_bella",
    "af_jessica",
    "af_kore",
    "af_nicole",
    "af_nova",
    "af_river",
    "af_sarah",
    "af_sky",
    "am_adam",
    "am_echo",
    "am_eric",
    "am_fenrir",
    "am_liam",
    "am_michael",
    "am_onyx",
    "am_puck",
    "am_santa",
];

/// The remaining voices shipped with Kokoro-82M.
const OTHER_VOICES: &[&str] = &[
    "bf_alice",
    "bf_emma",
    "bf_isabella",
    "bf_lily",
    "bm_daniel",
    "bm_fable",
    "bm_george",
    "bm_lewis",
    "jf_alpha",
    "jf_gongitsune",
    "jf_nezumi",
    "jf_tebukuro",
    "jm_kumo",
    "zf_xiaobei",
    "zf_xiaoni",
    "zf_xiaoxiao",
    "zf_xiaoyi",
    "zm_yunjian",
    "zm_yunxi",
    "zm_yunxia",
    "zm_yunyang",
    "ef_dora",
    "em_alex",
    "em_santa",
    "ff_siwis",
    "hf_alpha",
    "hf_beta",
    "hm_omega",
    "hm_psi",
    "if_sara",
    "im_nicola",
    "pf_dora",
    "pm_alex",
    "pm_santa",
];

/// Fixed, ordered list of selectable voices.
///
/// Indices shown to the user are 1-based; [`VoiceCatalog::by_index`] does
/// the translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::american_english()
    }
}

impl VoiceCatalog {
    /// Build a catalog from an explicit list of identifiers.
    pub fn from_ids(ids: &[&'static str]) -> Self {
        Self {
            voices: ids.iter().copied().map(Voice::new).collect(),
        }
    }

    /// The 20 American English voices, `af_heart` first.
    pub fn american_english() -> Self {
        Self::from_ids(AMERICAN_VOICES)
    }

    /// All 54 Kokoro-82M voices, American English first.
    pub fn kokoro_all() -> Self {
        let ids: Vec<&'static str> = [AMERICAN_VOICES, OTHER_VOICES].concat();
        Self::from_ids(&ids)
    }

    /// The Kokoro voices whose prefix matches `language`.
    pub fn for_language(language: LanguageCode) -> Self {
        let mut catalog = Self::kokoro_all();
        catalog.voices.retain(|v| v.language() == Some(language));
        catalog
    }

    /// Number of voices.
    pub fn len(&self) -> usize {
        self.voices.len()
    }

    /// Whether the catalog has no voices.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    /// Resolve a 1-based index.
    pub fn by_index(&self, index: usize) -> Option<Voice> {
        index
            .checked_sub(1)
            .and_then(|i| self.voices.get(i))
            .copied()
    }

    /// Iterate voices in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_american_list() {
        let catalog = VoiceCatalog::default();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.by_index(1).map(|v| v.id()), Some("af_heart"));
        assert_eq!(catalog.by_index(20).map(|v| v.id()), Some("am_santa"));
    }

    #[test]
    fn by_index_rejects_out_of_range() {
        let catalog = VoiceCatalog::default();
        assert!(catalog.by_index(0).is_none());
        assert!(catalog.by_index(21).is_none());
    }

    #[test]
    fn full_catalog_has_54_voices() {
        let catalog = VoiceCatalog::kokoro_all();
        assert_eq!(catalog.len(), 54);
        assert_eq!(catalog.by_index(21).map(|v| v.id()), Some("bf_alice"));
        assert_eq!(catalog.by_index(54).map(|v| v.id()), Some("pm_santa"));
    }

    #[test]
    fn language_catalog_keeps_display_order() {
        assert_eq!(
            VoiceCatalog::for_language(LanguageCode::AmericanEnglish),
            VoiceCatalog::american_english()
        );

        let british = VoiceCatalog::for_language(LanguageCode::BritishEnglish);
        assert_eq!(british.len(), 8);
        assert_eq!(british.by_index(1).map(|v| v.id()), Some("bf_alice"));
        assert!(british.iter().all(|v| v.id().starts_with('b')));

        assert_eq!(VoiceCatalog::for_language(LanguageCode::French).len(), 1);
    }

    #[test]
    fn voice_prefix_parsing() {
        assert_eq!(
            Voice::new("bm_george").language(),
            Some(LanguageCode::BritishEnglish)
        );
        assert_eq!(Voice::new("jf_alpha").language(), Some(LanguageCode::Japanese));
    }

    #[test]
    fn unknown_prefix_has_no_language() {
        assert_eq!(Voice::new("xx_custom").language(), None);
    }

    #[test]
    fn language_code_parses_single_characters() {
        assert_eq!("b".parse::<LanguageCode>().unwrap(), LanguageCode::BritishEnglish);
        assert_eq!("z".parse::<LanguageCode>().unwrap(), LanguageCode::Mandarin);

        let err = "en".parse::<LanguageCode>().unwrap_err();
        assert_eq!(err.0, "en");
        assert!("q".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn every_kokoro_voice_has_a_language() {
        for voice in VoiceCatalog::kokoro_all().iter() {
            assert!(voice.language().is_some(), "{voice} has no language");
        }
    }

    #[test]
    fn language_maps_to_kokoro_and_espeak_names() {
        assert_eq!(LanguageCode::AmericanEnglish.kokoro_lang(), "en-us");
        assert_eq!(LanguageCode::Mandarin.kokoro_lang(), "cmn");
        assert_eq!(LanguageCode::BritishEnglish.espeak_voice(), "en-gb-x-rp");
        assert!(LanguageCode::from_code('q').is_none());
    }
}
