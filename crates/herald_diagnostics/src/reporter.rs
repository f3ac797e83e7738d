//! The console reporter: renders events, writes them, and tracks exit status.

use crate::error::ReportError;
use crate::event::DiagnosticEvent;
use crate::renderer::{MessageRenderer, RendererConfig};
use crate::severity::Severity;
use crate::sink::MessageSink;
use std::io::{self, Write};

/// Mutable bookkeeping owned by a [`ConsoleReporter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReporterState {
    last_error_number: u32,
}

impl ReporterState {
    /// The id of the most recently reported error, or 0 if none was reported.
    pub fn last_error_number(&self) -> u32 {
        self.last_error_number
    }

    /// Returns `true` if at least one error has been reported.
    ///
    /// An error reported with id 0 is indistinguishable from success.
    pub fn has_errors(&self) -> bool {
        self.last_error_number != 0
    }

    fn record(&mut self, severity: Severity, id: u32) {
        if severity.is_error() {
            self.last_error_number = id;
        }
    }
}

/// Writes rendered diagnostics to a console stream.
///
/// Each call to [`report`](Self::report) renders the event, records its id if it
/// is an error, writes the message and a newline to the console in a single
/// write, and then hands the message to every secondary sink. Suppressed events
/// are dropped before any of that happens.
///
/// The reporter is not internally synchronized; wrap it in a
/// [`SharedReporter`](crate::SharedReporter) when several threads report.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    renderer: MessageRenderer,
    console: W,
    sinks: Vec<Box<dyn MessageSink>>,
    state: ReporterState,
}

impl ConsoleReporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    pub fn stdout(config: RendererConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a reporter writing to `console`.
    pub fn new(config: RendererConfig, console: W) -> Self {
        Self {
            renderer: MessageRenderer::new(config),
            console,
            sinks: Vec::new(),
            state: ReporterState::default(),
        }
    }

    /// Adds a secondary sink that receives a copy of every written message.
    pub fn with_sink(mut self, sink: impl MessageSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// The renderer used for every event.
    pub fn renderer(&self) -> &MessageRenderer {
        &self.renderer
    }

    /// Renders and writes one event.
    ///
    /// The error id is recorded before the write, so a failed write still
    /// leaves the exit status reflecting the error.
    pub fn report(&mut self, event: &DiagnosticEvent) -> Result<(), ReportError> {
        let Some(message) = self.renderer.render(event) else {
            log::trace!("message {} suppressed", event.id);
            return Ok(());
        };

        self.state.record(event.severity, event.id);
        log::debug!("reporting {} {}", event.severity, event.id);

        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(&message);
        line.push('\n');
        self.console.write_all(line.as_bytes())?;
        self.console.flush()?;

        for sink in &mut self.sinks {
            sink.write_message(event.severity, &message)
                .map_err(|source| ReportError::Sink {
                    name: sink.name().to_string(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Reports every event in order, stopping at the first write failure.
    pub fn report_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a DiagnosticEvent>,
    ) -> Result<(), ReportError> {
        for event in events {
            self.report(event)?;
        }
        Ok(())
    }

    /// The id of the most recently reported error, or 0 if none was reported.
    pub fn last_error_number(&self) -> u32 {
        self.state.last_error_number()
    }

    /// A snapshot of the reporter's state.
    pub fn state(&self) -> ReporterState {
        self.state
    }

    /// The process exit code: the last error id, saturated to `i32::MAX`.
    pub fn exit_code(&self) -> i32 {
        i32::try_from(self.last_error_number()).unwrap_or(i32::MAX)
    }

    /// Consumes the reporter and returns the console writer.
    pub fn into_inner(self) -> W {
        self.console
    }
}
