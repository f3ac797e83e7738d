//! Thread-safe wrapper serializing reports from several producers.

use crate::error::ReportError;
use crate::event::DiagnosticEvent;
use crate::reporter::{ConsoleReporter, ReporterState};
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`ConsoleReporter`] behind a mutex.
///
/// Each [`report`](Self::report) holds the lock for the whole render-and-write,
/// so messages from different threads are never interleaved and the last error
/// number reflects the order in which reports acquired the lock.
pub struct SharedReporter<W: Write = io::Stdout> {
    inner: Mutex<ConsoleReporter<W>>,
}

impl<W: Write> SharedReporter<W> {
    /// Wraps a reporter.
    pub fn new(reporter: ConsoleReporter<W>) -> Self {
        Self {
            inner: Mutex::new(reporter),
        }
    }

    /// Renders and writes one event under the lock.
    pub fn report(&self, event: &DiagnosticEvent) -> Result<(), ReportError> {
        self.lock().report(event)
    }

    /// The id of the most recently reported error, or 0 if none was reported.
    pub fn last_error_number(&self) -> u32 {
        self.lock().last_error_number()
    }

    /// A snapshot of the reporter's state.
    pub fn state(&self) -> ReporterState {
        self.lock().state()
    }

    /// The process exit code derived from the last error number.
    pub fn exit_code(&self) -> i32 {
        self.lock().exit_code()
    }

    /// Unwraps the inner reporter.
    pub fn into_inner(self) -> ConsoleReporter<W> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // A panic in another reporting thread cannot leave the state half-updated.
    fn lock(&self) -> MutexGuard<'_, ConsoleReporter<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> From<ConsoleReporter<W>> for SharedReporter<W> {
    fn from(reporter: ConsoleReporter<W>) -> Self {
        Self::new(reporter)
    }
}
