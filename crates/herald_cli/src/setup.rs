//! Shared reporter construction for CLI commands.
//!
//! Locates and loads `herald.toml`, merges the command-line overrides, and
//! attaches the secondary sinks the configuration asks for.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use herald_config::{find_config, load_config_file, resolve_renderer_config, HeraldConfig};
use herald_diagnostics::{ConsoleReporter, DiagnosticEvent, LogSink, Severity, WriterSink};

use crate::GlobalArgs;

/// A loaded configuration file together with where it was found.
pub struct LoadedConfig {
    /// Path of the file the configuration was read from.
    pub path: PathBuf,
    /// The parsed configuration.
    pub config: HeraldConfig,
}

/// Loads the configuration named by `--config`, or the nearest `herald.toml`
/// above `cwd`. Returns `None` when no file is named and none is found.
pub fn load_file_config(
    global: &GlobalArgs,
    cwd: &Path,
) -> Result<Option<LoadedConfig>, Box<dyn std::error::Error>> {
    let path = match global.config {
        Some(ref explicit) => PathBuf::from(explicit),
        None => match find_config(cwd) {
            Some(found) => found,
            None => {
                log::debug!("no herald.toml found above {}", cwd.display());
                return Ok(None);
            }
        },
    };
    let config = load_config_file(&path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Some(LoadedConfig { path, config }))
}

/// Builds a reporter writing to `console`, configured from files and flags.
pub fn build_reporter<W: Write>(
    global: &GlobalArgs,
    cwd: &Path,
    console: W,
) -> Result<ConsoleReporter<W>, Box<dyn std::error::Error>> {
    let loaded = load_file_config(global, cwd)?;
    let renderer_config =
        resolve_renderer_config(loaded.as_ref().map(|l| &l.config), &global.overrides)?;
    let short_name = renderer_config.short_name.clone();
    let mut reporter = ConsoleReporter::new(renderer_config, console);

    if let Some(loaded) = loaded {
        let reporter_section = &loaded.config.reporter;
        if reporter_section.log_messages {
            reporter = reporter.with_sink(LogSink::new(short_name));
        }
        if let Some(ref mirror) = reporter_section.mirror_file {
            let path = mirror_path(&loaded.path, mirror);
            let file = File::create(&path)
                .map_err(|e| format!("cannot create mirror file {}: {e}", path.display()))?;
            log::debug!("mirroring messages to {}", path.display());
            reporter = reporter.with_sink(WriterSink::new(path.display().to_string(), file));
        }
    }

    Ok(reporter)
}

/// Resolves a mirror file path relative to the directory of the config file.
fn mirror_path(config_path: &Path, mirror: &str) -> PathBuf {
    let mirror = Path::new(mirror);
    if mirror.is_absolute() {
        return mirror.to_path_buf();
    }
    config_path
        .parent()
        .map(|dir| dir.join(mirror))
        .unwrap_or_else(|| mirror.to_path_buf())
}

/// Returns `false` for events the host drops before they reach the reporter.
pub fn should_report(event: &DiagnosticEvent, global: &GlobalArgs) -> bool {
    !(global.quiet && event.severity == Severity::Verbose)
}
