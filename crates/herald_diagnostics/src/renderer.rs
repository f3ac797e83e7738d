//! Turns diagnostic events into display strings.

use crate::event::DiagnosticEvent;
use crate::severity::Severity;
use crate::template::MessageTemplates;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Settings a renderer is constructed with. Immutable once the renderer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Short tool name prefixed to message ids, usually four uppercase letters.
    pub short_name: String,
    /// Long tool name, usually the executable name. Used as the primary
    /// location of events that carry no source location.
    pub long_name: String,
    /// Whether to append the source trace block to each message.
    #[serde(default)]
    pub source_trace: bool,
    /// Presentation templates.
    #[serde(default)]
    pub templates: MessageTemplates,
}

impl RendererConfig {
    /// Creates a configuration with default templates and source tracing off.
    pub fn new(short_name: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            long_name: long_name.into(),
            source_trace: false,
            templates: MessageTemplates::default(),
        }
    }

    /// Turns the source trace appendix on or off.
    pub fn with_source_trace(mut self, enabled: bool) -> Self {
        self.source_trace = enabled;
        self
    }

    /// Replaces the presentation templates.
    pub fn with_templates(mut self, templates: MessageTemplates) -> Self {
        self.templates = templates;
        self
    }
}

/// Renders events in the `file(line) : error SHRT0042 : text` console format.
///
/// Produces output like:
/// ```text
/// Product.wxs(12) : warning CNDL1001 : bad attribute
/// ```
/// and, with source tracing on:
/// ```text
/// Product.wxs(12) : error CNDL0094 : the file cannot be found
/// Source trace:
///     at Product.wxs(12)
///     at Fragment.wxi(3)
/// ```
///
/// Rendering has no side effects; the same event always yields the same string.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    config: RendererConfig,
}

impl MessageRenderer {
    /// Creates a renderer.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer was built with.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders an event, or returns `None` if the event is suppressed.
    pub fn render(&self, event: &DiagnosticEvent) -> Option<String> {
        let message = event.resolved_text()?;
        let templates = &self.config.templates;

        let mut out = match event.severity {
            Severity::Information => templates.info(&message),
            Severity::Verbose | Severity::Warning | Severity::Error => templates.non_info(
                &self.primary_location(event),
                self.label(event.severity),
                &self.config.short_name,
                event.id,
                &message,
            ),
        };

        if self.config.source_trace {
            self.append_source_trace(&mut out, &self.trace_lines(event));
        }

        Some(out)
    }

    /// The identifier leading a warning or error line.
    ///
    /// This is the first location of the event (with its line when present), or
    /// the long tool name when the event has no locations.
    pub fn primary_location<'a>(&'a self, event: &'a DiagnosticEvent) -> Cow<'a, str> {
        match event.locations.first() {
            Some(first) if first.has_line_number() => {
                Cow::Owned(self.config.templates.location(first, true))
            }
            Some(first) => Cow::Borrowed(&first.file_name),
            None => Cow::Borrowed(&self.config.long_name),
        }
    }

    /// Every location of the event rendered as one trace entry, in order.
    pub fn trace_lines(&self, event: &DiagnosticEvent) -> Vec<String> {
        event
            .locations
            .iter()
            .map(|loc| self.config.templates.location(loc, false))
            .collect()
    }

    fn label(&self, severity: Severity) -> &str {
        match severity {
            Severity::Warning => &self.config.templates.warning_label,
            Severity::Error => &self.config.templates.error_label,
            Severity::Verbose => &self.config.templates.verbose_label,
            Severity::Information => "",
        }
    }

    fn append_source_trace(&self, out: &mut String, trace_lines: &[String]) {
        let templates = &self.config.templates;
        out.push('\n');
        if trace_lines.is_empty() {
            out.push_str(&templates.source_trace_unavailable);
        } else {
            out.push_str(&templates.source_trace);
            for line in trace_lines {
                out.push('\n');
                out.push_str(&templates.trace_location(line));
            }
        }
        out.push('\n');
    }
}
