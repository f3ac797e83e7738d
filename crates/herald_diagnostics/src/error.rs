//! Errors raised while reporting a message.

use std::io;

/// A failure to deliver a rendered message.
///
/// Rendering itself cannot fail; only the writes can. Nothing is retried, so the
/// host should treat either variant as fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the console failed, e.g. because stdout was closed.
    #[error("failed to write diagnostic to console: {0}")]
    Write(#[from] io::Error),

    /// A secondary sink rejected the message.
    #[error("failed to write diagnostic to sink '{name}': {source}")]
    Sink {
        /// The name of the failing sink.
        name: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
