//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading or validating a `herald.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the `herald.toml` schema.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] toml::de::Error),

    /// A tool name resolved to an empty string. Carries the offending key.
    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    /// A `[templates]` entry cannot be used for rendering.
    #[error("templates.{key}: {reason}")]
    InvalidTemplate {
        /// The template key, without the `templates.` prefix.
        key: &'static str,
        /// What is wrong with its value.
        reason: String,
    },
}
