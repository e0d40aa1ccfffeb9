//! Redirectable console I/O ports.
//!
//! A [`Console`] owns one optional output port and one optional input port.
//! With nothing registered it talks to the process's standard streams; a
//! registered port replaces the default wholesale, and registering `None`
//! restores it. Callers that need isolation (tests, embedded harnesses)
//! construct their own `Console` instead of mutating shared state.

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Line terminator appended by the newline-injecting write paths.
pub const NEWLINE: &str = "\n";

/// Errors from the console I/O paths.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Writing to the active output port failed.
    #[error("console write failed: {0}")]
    Write(#[source] io::Error),

    /// Reading from the active input port failed.
    #[error("console read failed: {0}")]
    Read(#[source] io::Error),
}

/// Output port: receives one chunk of text per write.
///
/// Any `FnMut(&str)` closure is a writer, so a capturing closure can be
/// registered directly.
pub trait ConsoleWriter {
    /// Write `text` exactly as given.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl<F> ConsoleWriter for F
where
    F: FnMut(&str),
{
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self(text);
        Ok(())
    }
}

/// Input port: produces one line of text per read.
///
/// Any `FnMut() -> String` closure is a reader.
pub trait ConsoleReader {
    /// Produce the next line, without its terminator.
    fn read_line(&mut self) -> io::Result<String>;
}

impl<F> ConsoleReader for F
where
    F: FnMut() -> String,
{
    fn read_line(&mut self) -> io::Result<String> {
        Ok(self())
    }
}

/// The writer/reader pair used by the harness and the failure reporter.
#[derive(Default)]
pub struct Console {
    writer: Option<Box<dyn ConsoleWriter>>,
    inject_newline: bool,
    reader: Option<Box<dyn ConsoleReader>>,
}

impl Console {
    /// Create a console backed by the standard streams.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active writer and the newline-injection flag in one call.
    ///
    /// `None` restores the default standard-output behavior, under which
    /// every [`write`](Self::write) appends the line terminator natively.
    /// With a writer registered, `inject_newline` controls whether the
    /// terminator is appended before the writer is invoked.
    pub fn register_writer(&mut self, writer: Option<Box<dyn ConsoleWriter>>, inject_newline: bool) {
        self.writer = writer;
        self.inject_newline = inject_newline;
    }

    /// Replace the active reader. `None` restores standard-input line reads.
    pub fn register_reader(&mut self, reader: Option<Box<dyn ConsoleReader>>) {
        self.reader = reader;
    }

    /// Emit one chunk of text through the active output port.
    ///
    /// Default port: `text` plus the line terminator goes to standard
    /// output, exactly once per call. Registered port: the writer receives
    /// `text` verbatim, or `text` plus [`NEWLINE`] when the injection flag
    /// was registered as true. Never blocks on user action.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        match self.writer.as_mut() {
            Some(writer) if self.inject_newline => {
                let mut line = String::with_capacity(text.len() + NEWLINE.len());
                line.push_str(text);
                line.push_str(NEWLINE);
                writer.write_text(&line).map_err(ConsoleError::Write)
            }
            Some(writer) => writer.write_text(text).map_err(ConsoleError::Write),
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                writeln!(out, "{text}").map_err(ConsoleError::Write)
            }
        }
    }

    /// Block for one line from the active input port.
    ///
    /// Default port: reads a line from standard input and strips the
    /// trailing `\n` / `\r\n`. A registered reader is invoked directly and
    /// its result returned as-is.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        match self.reader.as_mut() {
            Some(reader) => reader.read_line().map_err(ConsoleError::Read),
            None => {
                let mut line = String::new();
                io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(ConsoleError::Read)?;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Ok(line)
            }
        }
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("writer", &self.writer.is_some())
            .field("inject_newline", &self.inject_newline)
            .field("reader", &self.reader.is_some())
            .finish()
    }
}
