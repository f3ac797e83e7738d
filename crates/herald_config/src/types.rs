//! Configuration types deserialized from `herald.toml`.

use herald_diagnostics::MessageTemplates;
use serde::Deserialize;

/// The top-level configuration parsed from `herald.toml`.
#[derive(Debug, Deserialize)]
pub struct HeraldConfig {
    /// Tool identity and reporter behavior.
    pub reporter: ReporterSection,
    /// Presentation template overrides. Omitted keys keep their defaults.
    #[serde(default)]
    pub templates: MessageTemplates,
}

/// The `[reporter]` table.
#[derive(Debug, Deserialize)]
pub struct ReporterSection {
    /// Short tool name prefixed to message ids (e.g. `"CNDL"`).
    pub short_name: String,
    /// Long tool name, shown when an event has no source location.
    pub long_name: String,
    /// Append a source trace block to every message.
    #[serde(default)]
    pub source_trace: bool,
    /// Mirror every message into the `log` stream as well.
    #[serde(default)]
    pub log_messages: bool,
    /// Path of a file that receives a copy of every message.
    #[serde(default)]
    pub mirror_file: Option<String>,
}
