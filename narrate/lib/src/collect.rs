//! Interactive input collection.
//!
//! Gathers the output name, the voice and the text to synthesize. The voice
//! and input-mode prompts loop until they get a usable answer; running out
//! of input in one of those loops is an error rather than a hang.

use std::io::{BufRead, ErrorKind, Write};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::console::Console;
use crate::error::{CollectError, FileReadError};
use crate::types::CollectedInput;
use crate::voice::{Voice, VoiceCatalog};

const MODE_PROMPT: &str =
    "\nChoose input mode:\n1. Type text in terminal\n2. Read text from .txt file\nEnter 1 or 2: ";

/// How the user chose to supply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Lines typed at the prompt, ended by a blank line.
    Terminal,
    /// The whole contents of a `.txt` file.
    File,
}

impl InputMode {
    fn parse(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(Self::Terminal),
            "2" => Some(Self::File),
            _ => None,
        }
    }
}

/// Collect name, voice and text, in that order.
pub fn collect_input<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &VoiceCatalog,
) -> Result<CollectedInput, CollectError> {
    let audio_name = prompt_audio_name(console)?;
    let voice = prompt_voice(console, catalog)?;
    let text = prompt_text(console)?;

    debug!(
        audio_name = %audio_name,
        voice = %voice,
        text_len = text.len(),
        "Collected input"
    );

    Ok(CollectedInput {
        audio_name,
        voice: Some(voice),
        text,
    })
}

/// Ask for the output name. Emptiness is checked later by the validator.
pub fn prompt_audio_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, CollectError> {
    console
        .ask("Enter audio name: ")?
        .ok_or(CollectError::InputClosed {
            prompt: "audio name",
        })
}

/// List the catalog and ask for a 1-based voice number until one resolves.
pub fn prompt_voice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &VoiceCatalog,
) -> Result<Voice, CollectError> {
    console.say("\nSelect voice (enter number):")?;
    for (i, voice) in catalog.iter().enumerate() {
        console.say(format_args!("{}. {}", i + 1, voice))?;
    }

    loop {
        let answer = console
            .ask("Enter voice number: ")?
            .ok_or(CollectError::InputClosed {
                prompt: "voice number",
            })?;

        // Integers too large for i64 are still numbers, just out of range.
        let index = match answer.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => None,
            Err(_) => {
                console.say("Invalid input. Please enter a number.")?;
                continue;
            }
        };

        match index.and_then(|n| usize::try_from(n).ok()).and_then(|i| catalog.by_index(i)) {
            Some(voice) => return Ok(voice),
            None => console.say(format_args!(
                "Invalid voice number. Please enter a number between 1 and {}.",
                catalog.len()
            ))?,
        }
    }
}

/// Ask for an input mode and gather text, returning to the mode prompt
/// whenever a file cannot be used.
pub fn prompt_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, CollectError> {
    loop {
        let answer = console
            .ask(MODE_PROMPT)?
            .ok_or(CollectError::InputClosed {
                prompt: "input mode",
            })?;

        match InputMode::parse(&answer) {
            Some(InputMode::Terminal) => return read_terminal_text(console),
            Some(InputMode::File) => {
                let path = console
                    .ask("Enter the path to your .txt file: ")?
                    .ok_or(CollectError::InputClosed { prompt: "file path" })?;

                match read_text_file(Path::new(&path)) {
                    Ok(text) if !text.is_empty() => return Ok(text),
                    Ok(_) => {}
                    Err(err) => console.say(&err)?,
                }
                console.say(
                    "Failed to read text from file. Please try again or choose terminal input.",
                )?;
            }
            None => console.say("Invalid input mode. Please enter 1 or 2.")?,
        }
    }
}

/// Read lines until a blank line (or end of input) and join them with `\n`.
pub fn read_terminal_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, CollectError> {
    console.say("\nEnter text to synthesize (press Enter twice to finish):\n")?;

    let mut lines = Vec::new();
    while let Some(line) = console.read_line()? {
        if line.is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Read a whole UTF-8 text file.
pub fn read_text_file(path: &Path) -> Result<String, FileReadError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => FileReadError::NotFound {
            path: PathBuf::from(path),
        },
        _ => FileReadError::Unreadable {
            path: PathBuf::from(path),
            source,
        },
    })
}
