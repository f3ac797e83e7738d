//! Message severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic event.
///
/// Ordered from least severe (`Verbose`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order. The
/// ordering only drives display and log-level selection; it never filters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Detailed progress output. Shown with the id and short name like a
    /// warning, under the (empty by default) verbose label.
    Verbose,
    /// An informational notice with no id or label attached.
    #[serde(alias = "info")]
    Information,
    /// A potential problem that does not fail the build.
    Warning,
    /// A definite problem; its id becomes the process exit code.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// Returns `true` for severities rendered with the plain info template.
    ///
    /// Only [`Information`](Severity::Information) is; every other level
    /// carries the location, id, and short name.
    pub fn is_informational(self) -> bool {
        self == Severity::Information
    }

    /// The `log` level a message of this severity is mirrored at.
    pub fn log_level(self) -> log::Level {
        match self {
            Severity::Verbose => log::Level::Debug,
            Severity::Information => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Verbose => write!(f, "verbose"),
            Severity::Information => write!(f, "information"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}
