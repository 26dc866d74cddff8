//! End-to-end narration run.
//!
//! ```text
//! CollectingName -> CollectingVoice -> CollectingText -> Validating
//!     -> Synthesizing -> WritingOutput -> {Saved, WriteFailed}
//! ```
//!
//! Validation failures end the run early with [`RunOutcome::Rejected`].
//! Write failures are reported and end it with [`RunOutcome::WriteFailed`].
//! Synthesis failures are returned as errors.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::audio::{self, CombinedAudio};
use crate::collect::collect_input;
use crate::config::{NarrateConfig, SAMPLE_RATE};
use crate::console::Console;
use crate::engine::SynthesisEngine;
use crate::error::{NarrateError, SynthesisError};
use crate::types::{CollectedInput, SynthesisRequest};
use crate::validate::{Rejection, validate};
use crate::voice::VoiceCatalog;

/// How a run ended, when it did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Audio was written to this path.
    Saved(PathBuf),
    /// Input failed validation; nothing was synthesized.
    Rejected(Rejection),
    /// Audio was synthesized but could not be saved.
    WriteFailed(String),
}

/// Orchestrates one narration run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: NarrateConfig,
    catalog: VoiceCatalog,
}

impl Pipeline {
    /// Create a pipeline with the given configuration and the default
    /// American English catalog.
    pub fn new(config: NarrateConfig) -> Self {
        Self {
            config,
            catalog: VoiceCatalog::default(),
        }
    }

    /// Offer a different set of voices.
    #[must_use]
    pub fn with_catalog(mut self, catalog: VoiceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Prompt for input on `console`, synthesize with `engine` and save.
    pub fn run<R: BufRead, W: Write, E: SynthesisEngine>(
        &self,
        console: &mut Console<R, W>,
        engine: &E,
    ) -> Result<RunOutcome, NarrateError> {
        console.say("Kokoro TTS Generator (Terminal Version)\n")?;
        let input = collect_input(console, &self.catalog)?;
        self.run_collected(console, engine, input)
    }

    /// Run everything after collection with already-gathered input.
    pub fn run_collected<R: BufRead, W: Write, E: SynthesisEngine>(
        &self,
        console: &mut Console<R, W>,
        engine: &E,
        input: CollectedInput,
    ) -> Result<RunOutcome, NarrateError> {
        let audio_name = input.audio_name.clone();
        let request = match validate(input, &self.config) {
            Ok(request) => request,
            Err(rejection) => {
                warn!(%rejection, "Rejected input");
                console.say(&rejection)?;
                return Ok(RunOutcome::Rejected(rejection));
            }
        };

        let combined = self.synthesize(console, engine, &request)?;
        let buffer = combined.into_buffer(SAMPLE_RATE);

        match audio::write_wav(&self.config.output_dir, &audio_name, &buffer) {
            Ok(path) => {
                console.say(format_args!("\nSuccess! Audio saved to: {}", path.display()))?;
                console.say(format_args!(
                    "File is located in the '{}' directory.",
                    self.config.output_dir.display()
                ))?;
                Ok(RunOutcome::Saved(path))
            }
            Err(err) => {
                warn!(error = %err, "Failed to save audio");
                let message = format!("Error saving audio: {err}");
                console.say(&message)?;
                Ok(RunOutcome::WriteFailed(message))
            }
        }
    }

    /// Pull every segment from the engine, reporting each one, and
    /// concatenate them in yield order.
    fn synthesize<R: BufRead, W: Write, E: SynthesisEngine>(
        &self,
        console: &mut Console<R, W>,
        engine: &E,
        request: &SynthesisRequest,
    ) -> Result<CombinedAudio, NarrateError> {
        info!(voice = %request.voice(), "Synthesizing");

        let mut combined = CombinedAudio::new();
        for (i, segment) in engine.synthesize(request)?.enumerate() {
            let segment = segment?;
            debug!(
                index = i + 1,
                samples = segment.samples.len(),
                graphemes = %segment.graphemes,
                "Received segment"
            );
            console.say(format_args!("Segment {}:", i + 1))?;
            console.say(format_args!("  Grapheme Sequence: {}", segment.graphemes))?;
            console.say(format_args!("  Phoneme Sequence: {}", segment.phonemes))?;
            combined.push(segment);
        }

        if combined.segment_count() == 0 {
            return Err(SynthesisError::NoSegments.into());
        }
        Ok(combined)
    }
}
