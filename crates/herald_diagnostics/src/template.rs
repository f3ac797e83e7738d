//! Localized presentation templates for rendered messages.
//!
//! Templates use named `{placeholder}` fields. Unknown placeholders and
//! unmatched braces are copied to the output unchanged, and substituted values
//! are never re-scanned, so message text containing braces is safe.

use herald_source::SourceLocation;
use serde::{Deserialize, Serialize};

/// Widest zero-padding applied to `{id}`; `u32::MAX` has ten digits.
pub const MAX_ID_WIDTH: usize = 10;

/// Substitutes `{name}` placeholders in `template` with values from `args`.
pub fn expand(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// The set of strings that decide how a message looks on the console.
///
/// Every field has a default, so a partial `[templates]` table in a config file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// Body of informational messages. Placeholder: `message`.
    pub info_message: String,
    /// Body of verbose messages, warnings, and errors. Placeholders: `location`, `label`,
    /// `short_name`, `id`, `message`.
    pub non_info_message: String,
    /// Primary location when it carries a line. Placeholders: `file`, `line`.
    pub first_line_number: String,
    /// Trace entry when it carries a line. Placeholders: `file`, `line`.
    pub line_number: String,
    /// Label inserted for verbose messages. Empty by default.
    pub verbose_label: String,
    /// Label inserted for warnings.
    pub warning_label: String,
    /// Label inserted for errors.
    pub error_label: String,
    /// Header line of the source trace appendix.
    pub source_trace: String,
    /// One line of the source trace appendix. Placeholder: `location`.
    pub source_trace_location: String,
    /// Notice shown when tracing is on but the event has no locations.
    pub source_trace_unavailable: String,
    /// Minimum number of digits `{id}` is zero-padded to, capped at [`MAX_ID_WIDTH`].
    pub id_width: usize,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            info_message: "{message}".to_string(),
            non_info_message: "{location} : {label} {short_name}{id} : {message}".to_string(),
            first_line_number: "{file}({line})".to_string(),
            line_number: "{file}({line})".to_string(),
            verbose_label: String::new(),
            warning_label: "warning".to_string(),
            error_label: "error".to_string(),
            source_trace: "Source trace:".to_string(),
            source_trace_location: "    at {location}".to_string(),
            source_trace_unavailable: "Source trace unavailable.".to_string(),
            id_width: 4,
        }
    }
}

impl MessageTemplates {
    /// Formats an informational message body.
    pub fn info(&self, message: &str) -> String {
        expand(&self.info_message, &[("message", message)])
    }

    /// Formats a verbose, warning, or error message body.
    pub fn non_info(
        &self,
        location: &str,
        label: &str,
        short_name: &str,
        id: u32,
        message: &str,
    ) -> String {
        let id = format!("{id:0width$}", width = self.id_width.min(MAX_ID_WIDTH));
        expand(
            &self.non_info_message,
            &[
                ("location", location),
                ("label", label),
                ("short_name", short_name),
                ("id", id.as_str()),
                ("message", message),
            ],
        )
    }

    /// Formats a location, using the primary-location template when `first` is set.
    ///
    /// Locations without a line number render as the bare file name.
    pub fn location(&self, location: &SourceLocation, first: bool) -> String {
        match location.line_number {
            Some(line) => {
                let template = if first {
                    &self.first_line_number
                } else {
                    &self.line_number
                };
                let line = line.to_string();
                expand(
                    template,
                    &[("file", location.file_name.as_str()), ("line", line.as_str())],
                )
            }
            None => location.file_name.clone(),
        }
    }

    /// Formats one line of the source trace appendix.
    pub fn trace_location(&self, location: &str) -> String {
        expand(&self.source_trace_location, &[("location", location)])
    }
}
