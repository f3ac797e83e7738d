//! Parsing and validation of `herald.toml` reporter configuration files.
//!
//! This crate reads the configuration file, applies command-line overrides, and
//! produces the [`RendererConfig`](herald_diagnostics::RendererConfig) a
//! console reporter is built from.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::{resolve_renderer_config, Overrides, DEFAULT_LONG_NAME, DEFAULT_SHORT_NAME};
pub use types::*;
