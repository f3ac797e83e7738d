//! Merging the configuration file with command-line overrides.

use crate::error::ConfigError;
use crate::types::HeraldConfig;
use herald_diagnostics::{MessageTemplates, RendererConfig};

/// Short name used when neither a config file nor a flag provides one.
pub const DEFAULT_SHORT_NAME: &str = "HRLD";

/// Long name used when neither a config file nor a flag provides one.
pub const DEFAULT_LONG_NAME: &str = "herald";

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// Replacement short name.
    pub short_name: Option<String>,
    /// Replacement long name.
    pub long_name: Option<String>,
    /// Forces source tracing on or off.
    pub source_trace: Option<bool>,
}

/// Builds the renderer configuration from an optional file plus overrides.
///
/// Flags win over the file, and the file wins over the built-in defaults.
pub fn resolve_renderer_config(
    config: Option<&HeraldConfig>,
    overrides: &Overrides,
) -> Result<RendererConfig, ConfigError> {
    let (short_name, long_name, source_trace, templates) = match config {
        Some(c) => (
            c.reporter.short_name.clone(),
            c.reporter.long_name.clone(),
            c.reporter.source_trace,
            c.templates.clone(),
        ),
        None => (
            DEFAULT_SHORT_NAME.to_string(),
            DEFAULT_LONG_NAME.to_string(),
            false,
            MessageTemplates::default(),
        ),
    };

    let short_name = overrides.short_name.clone().unwrap_or(short_name);
    let long_name = overrides.long_name.clone().unwrap_or(long_name);
    let source_trace = overrides.source_trace.unwrap_or(source_trace);

    if short_name.is_empty() {
        return Err(ConfigError::EmptyName("short_name"));
    }
    if long_name.is_empty() {
        return Err(ConfigError::EmptyName("long_name"));
    }

    Ok(RendererConfig::new(short_name, long_name)
        .with_source_trace(source_trace)
        .with_templates(templates))
}
