//! Narrate
//!
//! Terminal front-end for the Kokoro text-to-speech model: collect a voice
//! and some text, synthesize it chunk by chunk, and save one WAV file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use narrate_lib::{Console, KokoroEngine, NarrateConfig, Pipeline};
//!
//! # fn main() -> Result<(), narrate_lib::NarrateError> {
//! let config = NarrateConfig::default();
//! let engine = KokoroEngine::new(config.language);
//! let mut console = Console::stdio();
//! Pipeline::new(config).run(&mut console, &engine)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`collect`](mod@collect) - Interactive prompts for name, voice and text
//! - [`validate`](mod@validate) - Checks collected input and builds a [`SynthesisRequest`]
//! - [`engine`] - The [`SynthesisEngine`] trait and the Kokoro implementation
//! - [`audio`] - Segment concatenation and WAV I/O
//! - [`pipeline`] - The end-to-end run

pub mod audio;
pub mod collect;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod validate;
pub mod voice;

pub use audio::{AudioBuffer, CombinedAudio, read_wav, write_wav};
pub use collect::{InputMode, collect_input};
pub use config::{DEFAULT_OUTPUT_DIR, NarrateConfig, SAMPLE_RATE};
pub use console::Console;
pub use engine::{KokoroEngine, Phonemizer, SynthesisEngine};
pub use error::{
    CollectError, FileReadError, NarrateError, PhonemizeError, SynthesisError, UnknownLanguageCode,
    WriteError,
};
pub use pipeline::{Pipeline, RunOutcome};
pub use types::{CollectedInput, SynthesisRequest, SynthesisSegment};
pub use validate::{Rejection, validate};
pub use voice::{LanguageCode, Voice, VoiceCatalog};
