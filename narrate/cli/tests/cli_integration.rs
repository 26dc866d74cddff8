//! Integration tests for the narrate CLI.
//!
//! These drive the real binary through piped stdin. None of them reach the
//! synthesis step, so `kokoro-tts` does not need to be installed.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn narrate_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("narrate").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn cli_shows_help() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate WAV narration"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--all-voices"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn cli_shows_version() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("narrate 0.1.0"));
}

#[test]
fn empty_name_is_rejected_gracefully() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .write_stdin("\n1\n1\nHello world\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. af_heart"))
        .stdout(predicate::str::contains("Error: Audio name cannot be empty."));

    assert!(!dir.path().join("audio_output").exists());
}

#[test]
fn invalid_voice_numbers_are_reprompted() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .write_stdin("name\nzero\n99\n2\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains(
            "Invalid voice number. Please enter a number between 1 and 20.",
        ))
        .stdout(predicate::str::contains("Error: Text input cannot be empty."));
}

#[test]
fn missing_file_returns_to_mode_prompt() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .write_stdin("\n1\n2\nno-such-file.txt\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: File not found at path: no-such-file.txt",
        ))
        .stdout(predicate::str::contains(
            "Failed to read text from file. Please try again or choose terminal input.",
        ))
        .stdout(predicate::str::contains("Error: Audio name cannot be empty."));
}

#[test]
fn lang_flag_lists_that_languages_voices() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .args(["--lang", "b"])
        .write_stdin("name\n9\n1\n1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. bf_alice"))
        .stdout(predicate::str::contains("8. bm_lewis"))
        .stdout(predicate::str::contains("af_heart").not())
        .stdout(predicate::str::contains(
            "Invalid voice number. Please enter a number between 1 and 8.",
        ))
        .stdout(predicate::str::contains("Error: Text input cannot be empty."));
}

#[test]
fn unknown_lang_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .args(["--lang", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language code 'xx'"));
}

#[test]
fn all_voices_offers_every_voice_and_rejects_mismatched_language() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .arg("--all-voices")
        .write_stdin("name\n21\n1\nHello world\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("21. bf_alice"))
        .stdout(predicate::str::contains("54. pm_santa"))
        .stdout(predicate::str::contains(
            "Error: Voice bf_alice does not match engine language 'a'.",
        ));

    assert!(!dir.path().join("audio_output").exists());
}

#[test]
fn closed_stdin_exits_with_error() {
    let dir = TempDir::new().unwrap();
    narrate_cmd(&dir)
        .write_stdin("name\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}
