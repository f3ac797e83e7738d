//! Diagnostic events, message rendering, and console reporting.
//!
//! A [`DiagnosticEvent`] carries a numeric message id, a [`Severity`], the source
//! locations it refers to, and its already-resolved text. The pure
//! [`MessageRenderer`] turns an event into a display string using the localized
//! [`MessageTemplates`], and the [`ConsoleReporter`] writes that string to the
//! console, mirrors it into any secondary [`MessageSink`]s, and remembers the id
//! of the last error so the host process can use it as its exit code.

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod renderer;
pub mod reporter;
pub mod severity;
pub mod shared;
pub mod sink;
pub mod template;

pub use error::ReportError;
pub use event::DiagnosticEvent;
pub use herald_source::SourceLocation;
pub use renderer::{MessageRenderer, RendererConfig};
pub use reporter::{ConsoleReporter, ReporterState};
pub use severity::Severity;
pub use shared::SharedReporter;
pub use sink::{LogSink, MessageSink, WriterSink};
pub use template::{MessageTemplates, MAX_ID_WIDTH};
