//! Secondary destinations that receive a copy of every reported message.

use crate::severity::Severity;
use std::io::{self, Write};

/// A destination that receives each rendered message after it reaches the console.
///
/// Sinks are attached to a [`ConsoleReporter`](crate::ConsoleReporter) with
/// [`with_sink`](crate::ConsoleReporter::with_sink) and are called in the order
/// they were added.
pub trait MessageSink: Send {
    /// A short name used in error messages when the sink fails.
    fn name(&self) -> &str;

    /// Receives one fully rendered message.
    fn write_message(&mut self, severity: Severity, message: &str) -> io::Result<()>;
}

/// Mirrors messages into the `log` facade, one record per message.
///
/// Records are emitted at [`Severity::log_level`] with the configured target,
/// usually the tool's short name.
pub struct LogSink {
    target: String,
}

impl LogSink {
    /// Creates a sink logging under `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl MessageSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn write_message(&mut self, severity: Severity, message: &str) -> io::Result<()> {
        log::log!(target: self.target.as_str(), severity.log_level(), "{message}");
        Ok(())
    }
}

/// Appends each message as a line to any writer, e.g. a log file.
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a named sink over `writer`.
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> MessageSink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_message(&mut self, _severity: Severity, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()
    }
}
