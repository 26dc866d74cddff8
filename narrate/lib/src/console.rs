//! Line-oriented console I/O.
//!
//! [`Console`] wraps any `BufRead` input and `Write` output so the prompt
//! loops can run against stdin/stdout in the binary and against scripted
//! buffers in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A prompt/answer console over arbitrary reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console from a reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing newline (and a
    /// preceding carriage return) is stripped.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without printing a prompt.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print a full line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
