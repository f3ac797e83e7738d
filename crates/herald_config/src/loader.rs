//! Configuration file discovery, loading, and validation.

use crate::error::ConfigError;
use crate::types::HeraldConfig;
use herald_diagnostics::MAX_ID_WIDTH;
use std::path::{Path, PathBuf};

/// The configuration file name looked up in project directories.
pub const CONFIG_FILE_NAME: &str = "herald.toml";

/// Walks up from `start` looking for the nearest `herald.toml`.
///
/// Returns the path of the file, or `None` if no directory up to the root has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads and validates `<dir>/herald.toml`.
pub fn load_config(dir: &Path) -> Result<HeraldConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<HeraldConfig, ConfigError> {
    log::debug!("loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `herald.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<HeraldConfig, ConfigError> {
    let config: HeraldConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and template values are usable.
fn validate_config(config: &HeraldConfig) -> Result<(), ConfigError> {
    if config.reporter.short_name.is_empty() {
        return Err(ConfigError::EmptyName("reporter.short_name"));
    }
    if config.reporter.long_name.is_empty() {
        return Err(ConfigError::EmptyName("reporter.long_name"));
    }
    let templates = &config.templates;
    if templates.id_width > MAX_ID_WIDTH {
        return Err(ConfigError::InvalidTemplate {
            key: "id_width",
            reason: format!("must be at most {MAX_ID_WIDTH}, got {}", templates.id_width),
        });
    }
    for (key, template) in [
        ("info_message", &templates.info_message),
        ("non_info_message", &templates.non_info_message),
    ] {
        if !template.contains("{message}") {
            return Err(ConfigError::InvalidTemplate {
                key,
                reason: "must contain {message}".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[reporter]
short_name = "CNDL"
long_name = "candle.exe"
"#;

    #[test]
    fn parse_minimal_config() {
        let config = load_config_from_str(MINIMAL).unwrap();
        assert_eq!(config.reporter.short_name, "CNDL");
        assert_eq!(config.reporter.long_name, "candle.exe");
        assert!(!config.reporter.source_trace);
        assert!(!config.reporter.log_messages);
        assert!(config.reporter.mirror_file.is_none());
        assert_eq!(config.templates, herald_diagnostics::MessageTemplates::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[reporter]
short_name = "LGHT"
long_name = "light.exe"
source_trace = true
log_messages = true
mirror_file = "out/light.log"

[templates]
warning_label = "avertissement"
error_label = "erreur"
id_width = 5
source_trace_location = "  -> {location}"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert!(config.reporter.source_trace);
        assert!(config.reporter.log_messages);
        assert_eq!(config.reporter.mirror_file.as_deref(), Some("out/light.log"));
        assert_eq!(config.templates.warning_label, "avertissement");
        assert_eq!(config.templates.error_label, "erreur");
        assert_eq!(config.templates.id_width, 5);
        assert_eq!(config.templates.source_trace_location, "  -> {location}");
        assert_eq!(config.templates.source_trace, "Source trace:");
    }

    #[test]
    fn missing_reporter_table_errors() {
        let err = load_config_from_str("[templates]\nerror_label = \"E\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn empty_short_name_errors() {
        let toml = "[reporter]\nshort_name = \"\"\nlong_name = \"candle.exe\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName("reporter.short_name")));
    }

    #[test]
    fn empty_long_name_errors() {
        let toml = "[reporter]\nshort_name = \"CNDL\"\nlong_name = \"\"\n";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName("reporter.long_name")));
    }

    #[test]
    fn oversized_id_width_errors() {
        let toml = format!("{MINIMAL}\n[templates]\nid_width = 11\n");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTemplate { key: "id_width", .. }));
    }

    #[test]
    fn template_without_message_errors() {
        let toml = format!("{MINIMAL}\n[templates]\nnon_info_message = \"{{location}} : {{id}}\"\n");
        let err = load_config_from_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTemplate { key: "non_info_message", .. }));
    }

    #[test]
    fn info_template_without_message_names_key() {
        let toml = format!("{MINIMAL}\n[templates]\ninfo_message = \"note\"\n");
        let err = load_config_from_str(&toml).unwrap_err();
        assert_eq!(err.to_string(), "templates.info_message: must contain {message}");
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("[reporter\nshort_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn missing_directory_is_read_error() {
        let err = load_config(Path::new("/nonexistent/herald/project")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Read { ref path, .. } if path.ends_with(CONFIG_FILE_NAME)
        ));
    }

    #[test]
    fn load_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), MINIMAL).unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.reporter.short_name, "CNDL");
    }

    #[test]
    fn find_config_in_current_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), MINIMAL).unwrap();
        assert_eq!(
            find_config(tmp.path()),
            Some(tmp.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn find_config_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), MINIMAL).unwrap();
        let sub = tmp.path().join("src").join("wix");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(find_config(&sub), Some(tmp.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn find_config_ignores_directories_with_that_name() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir_all(sub.join(CONFIG_FILE_NAME)).unwrap();
        assert_ne!(find_config(&sub), Some(sub.join(CONFIG_FILE_NAME)));
    }
}
