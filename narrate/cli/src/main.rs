use std::path::PathBuf;

use clap::Parser;
use narrate_lib::{
    Console, DEFAULT_OUTPUT_DIR, KokoroEngine, LanguageCode, NarrateConfig, NarrateError,
    Phonemizer, Pipeline, RunOutcome, SynthesisEngine, VoiceCatalog,
};
use owo_colors::{OwoColorize, Stream};
use thiserror::Error;
use tracing::{info, warn};

/// Turn typed or file text into a WAV file with the Kokoro TTS model.
///
/// The audio name, voice and text are all asked for interactively.
///
/// Examples:
///   narrate                        # Save to ./audio_output/<name>.wav
///   narrate --output-dir renders   # Save to ./renders/<name>.wav
///   narrate --lang b               # Offer the British English voices
#[derive(Debug, Parser)]
#[command(name = "narrate")]
#[command(version)]
#[command(about = "Generate WAV narration with the Kokoro TTS model")]
struct Cli {
    /// Directory the WAV file is written to.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Kokoro language code: a, b, e, f, h, i, j, p or z.
    #[arg(long, value_name = "CODE", default_value = "a")]
    lang: LanguageCode,

    /// List all Kokoro voices instead of only those for --lang.
    #[arg(long)]
    all_voices: bool,

    /// Enable debug logging to ~/.narrate-debug.log.
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("debug log error: {0}")]
    DebugLog(std::io::Error),

    #[error(transparent)]
    Run(#[from] NarrateError),
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if cli.debug {
        init_debug_logging()?;
    } else {
        init_stderr_logging();
    }

    let config = NarrateConfig::new()
        .with_output_dir(&cli.output_dir)
        .with_language(cli.lang);
    let catalog = if cli.all_voices {
        VoiceCatalog::kokoro_all()
    } else {
        VoiceCatalog::for_language(cli.lang)
    };

    let phonemizer = Phonemizer::new();
    if !phonemizer.is_available() {
        info!("espeak-ng not found; phoneme sequences will be empty");
    }
    let engine = KokoroEngine::new(config.language).with_phonemizer(phonemizer);
    if !engine.is_ready() {
        warn!("kokoro-tts not found on PATH; synthesis will fail");
        eprintln!(
            "{}",
            "Warning: kokoro-tts was not found on PATH."
                .if_supports_color(Stream::Stderr, |t| t.yellow())
        );
    }

    let mut console = Console::stdio();
    let outcome = Pipeline::new(config)
        .with_catalog(catalog)
        .run(&mut console, &engine)
        .inspect_err(|err| {
            eprintln!(
                "{}",
                format!("Error: {err}").if_supports_color(Stream::Stderr, |t| t.red())
            );
        })?;

    match &outcome {
        RunOutcome::Saved(path) => info!(path = %path.display(), "Run finished"),
        RunOutcome::Rejected(reason) => info!(%reason, "Run rejected"),
        RunOutcome::WriteFailed(message) => warn!(%message, "Run ended without output"),
    }

    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_stderr_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initializes debug logging to ~/.narrate-debug.log.
fn init_debug_logging() -> Result<(), CliError> {
    use std::fs::OpenOptions;
    use tracing_subscriber::EnvFilter;

    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let log_path = home.join(".narrate-debug.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(CliError::DebugLog)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}
