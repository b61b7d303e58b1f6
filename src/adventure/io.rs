//! Input and output collaborators for the game loop.
//!
//! The loop never touches stdin/stdout directly. It reads through an
//! [`InputSource`] and writes through an [`OutputSink`], so tests can swap in
//! a [`ScriptedInput`] and a [`Transcript`] and check the exact lines.

use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::errors::AdventureError;
use crate::logutil::escape_log;

/// Message shown when the player submits an empty line.
pub const INVALID_INPUT: &str = "Invalid input.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn tag(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

/// Line-oriented sink for player-facing text.
pub trait OutputSink {
    fn emit(&mut self, severity: Severity, line: &str);

    fn info(&mut self, line: &str) {
        self.emit(Severity::Info, line);
    }

    fn warn(&mut self, line: &str) {
        self.emit(Severity::Warning, line);
    }

    fn error(&mut self, line: &str) {
        self.emit(Severity::Error, line);
    }
}

/// Blocking line reader. `Ok(None)` means the source is exhausted.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AdventureError>;

    /// Whether lines read from this source should be echoed to the output.
    fn echoes(&self) -> bool {
        false
    }
}

/// Writes to any `Write`, normally stdout.
pub struct ConsoleSink<W: Write> {
    writer: W,
    show_severity: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(show_severity: bool) -> Self {
        Self::new(io::stdout(), show_severity)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, show_severity: bool) -> Self {
        Self {
            writer,
            show_severity,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, severity: Severity, line: &str) {
        let result = if self.show_severity && severity != Severity::Info {
            writeln!(self.writer, "[{}] {}", severity.tag(), line)
        } else {
            writeln!(self.writer, "{}", line)
        };
        if let Err(e) = result.and_then(|_| self.writer.flush()) {
            warn!("Failed to write game output: {}", e);
        }
    }
}

/// Records every emitted line in order.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Vec<(Severity, String)>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Severity, String)] {
        &self.lines
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|(_, l)| l == text)
    }

    /// How many times `text` was emitted verbatim.
    pub fn count(&self, text: &str) -> usize {
        self.lines.iter().filter(|(_, l)| l == text).count()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == Severity::Error)
            .map(|(_, l)| l.as_str())
            .collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl OutputSink for Transcript {
    fn emit(&mut self, severity: Severity, line: &str) {
        self.lines.push((severity, line.to_string()));
    }
}

/// Line reader over any `BufRead`. Bytes that are not UTF-8 are replaced,
/// so a garbled line reaches the room as an unrecognized command.
pub struct ReaderInput<R: BufRead> {
    reader: R,
    show_marker: bool,
}

/// Interactive reader over stdin, printing a `> ` marker before each read.
pub type StdinInput = ReaderInput<io::StdinLock<'static>>;

impl Default for ReaderInput<io::StdinLock<'static>> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderInput<io::StdinLock<'static>> {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
            show_marker: true,
        }
    }
}

impl<R: BufRead> ReaderInput<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            show_marker: false,
        }
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, AdventureError> {
        if self.show_marker {
            let mut stdout = io::stdout();
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Replays a fixed list of lines, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    echo: bool,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            echo: false,
        }
    }

    /// Load one command per line from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AdventureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(content.lines()))
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, AdventureError> {
        Ok(self.lines.pop_front())
    }

    fn echoes(&self) -> bool {
        self.echo
    }
}

/// Ask `message` until a non-empty line arrives. Empty lines get
/// [`INVALID_INPUT`] and another read.
pub fn prompt_non_empty(
    input: &mut dyn InputSource,
    out: &mut dyn OutputSink,
    message: &str,
) -> Result<String, AdventureError> {
    out.warn(message);
    loop {
        let raw = input
            .read_line(message)?
            .ok_or(AdventureError::InputClosed)?;
        let line = raw.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            out.error(INVALID_INPUT);
            continue;
        }
        debug!("read input: {}", escape_log(line));
        if input.echoes() {
            out.info(&format!("> {}", line));
        }
        return Ok(line.to_string());
    }
}
