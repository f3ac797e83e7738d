//! Diagnostic events raised by the toolchain.

use crate::severity::Severity;
use crate::template::expand;
use herald_source::SourceLocation;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One message occurrence: id, severity, where it happened, and what it says.
///
/// The `text` is resolved and localized upstream. An absent or empty text means
/// the message was suppressed: rendering it produces nothing and reporting it
/// leaves the reporter untouched. Positional placeholders (`{0}`, `{1}`, ...) in
/// the text are filled from `data` at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// The numeric message identifier.
    pub id: u32,
    /// The severity the message is reported at.
    pub severity: Severity,
    /// Source locations, outermost first. May be empty.
    #[serde(default)]
    pub locations: Vec<SourceLocation>,
    /// The resolved message text, or `None` if the message is suppressed.
    #[serde(default)]
    pub text: Option<String>,
    /// Arguments substituted into the text's positional placeholders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

impl DiagnosticEvent {
    /// Creates an event with the given id, severity, and text and no locations.
    pub fn new(id: u32, severity: Severity, text: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            locations: Vec::new(),
            text: Some(text.into()),
            data: Vec::new(),
        }
    }

    /// Creates an informational event.
    pub fn information(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, Severity::Information, text)
    }

    /// Creates a warning event.
    pub fn warning(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, Severity::Warning, text)
    }

    /// Creates an error event.
    pub fn error(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, Severity::Error, text)
    }

    /// Creates an event whose text was suppressed upstream.
    pub fn suppressed(id: u32, severity: Severity) -> Self {
        Self {
            id,
            severity,
            locations: Vec::new(),
            text: None,
            data: Vec::new(),
        }
    }

    /// Appends a source location.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }

    /// Appends several source locations in order.
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = SourceLocation>) -> Self {
        self.locations.extend(locations);
        self
    }

    /// Appends a substitution argument.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.data.push(arg.into());
        self
    }

    /// Returns `true` if this event has no text to display.
    pub fn is_suppressed(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Returns the display text with positional arguments substituted.
    ///
    /// `None` for suppressed events.
    pub fn resolved_text(&self) -> Option<Cow<'_, str>> {
        let text = self.text.as_deref().filter(|t| !t.is_empty())?;
        if self.data.is_empty() {
            return Some(Cow::Borrowed(text));
        }

        let names: Vec<String> = (0..self.data.len()).map(|i| i.to_string()).collect();
        let args: Vec<(&str, &str)> = names
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(String::as_str))
            .collect();
        Some(Cow::Owned(expand(text, &args)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_warning() {
        let event = DiagnosticEvent::warning(1001, "bad attribute")
            .with_location(SourceLocation::new("a.wxs", 12));
        assert_eq!(event.severity, Severity::Warning);
        assert_eq!(event.id, 1001);
        assert_eq!(event.locations.len(), 1);
        assert!(!event.is_suppressed());
    }

    #[test]
    fn suppressed_has_no_text() {
        let event = DiagnosticEvent::suppressed(42, Severity::Error);
        assert!(event.is_suppressed());
        assert!(event.resolved_text().is_none());
    }

    #[test]
    fn empty_text_is_suppressed() {
        let event = DiagnosticEvent::error(42, "");
        assert!(event.is_suppressed());
        assert!(event.resolved_text().is_none());
    }

    #[test]
    fn resolved_text_without_data_borrows() {
        let event = DiagnosticEvent::information(1, "plain {0}");
        assert!(matches!(event.resolved_text(), Some(Cow::Borrowed("plain {0}"))));
    }

    #[test]
    fn resolved_text_substitutes_positional_args() {
        let event = DiagnosticEvent::error(94, "The file '{0}' cannot be found in '{1}'.")
            .with_arg("banner.bmp")
            .with_arg("Binary");
        assert_eq!(
            event.resolved_text().as_deref(),
            Some("The file 'banner.bmp' cannot be found in 'Binary'.")
        );
    }

    #[test]
    fn locations_keep_order() {
        let event = DiagnosticEvent::error(1, "x").with_locations([
            SourceLocation::new("outer.wxs", 3),
            SourceLocation::file("inner.wxi"),
        ]);
        assert_eq!(event.locations[0].file_name, "outer.wxs");
        assert_eq!(event.locations[1].file_name, "inner.wxi");
    }

    #[test]
    fn deserialize_json_line() {
        let json = r#"{"id":1001,"severity":"warning","locations":[{"file":"a.wxs","line":12}],"text":"bad attribute"}"#;
        let event: DiagnosticEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            DiagnosticEvent::warning(1001, "bad attribute")
                .with_location(SourceLocation::new("a.wxs", 12))
        );
    }

    #[test]
    fn deserialize_minimal_is_suppressed() {
        let event: DiagnosticEvent = serde_json::from_str(r#"{"id":5,"severity":"error"}"#).unwrap();
        assert!(event.is_suppressed());
        assert!(event.locations.is_empty());
    }
}
