//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReporterConfig;
use std::path::Path;

/// Loads and validates a `herald.toml` configuration from a project directory.
///
/// Reads `<project_dir>/herald.toml`, parses it, and validates the values.
pub fn load_config(project_dir: &Path) -> Result<ReporterConfig, ConfigError> {
    let config_path = project_dir.join("herald.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `herald.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ReporterConfig, ConfigError> {
    let config: ReporterConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are consistent.
fn validate_config(config: &ReporterConfig) -> Result<(), ConfigError> {
    if let Some(base) = &config.report.base_path {
        if base.is_relative() {
            return Err(ConfigError::ValidationError(
                "report.base_path must be absolute".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;
    use std::path::PathBuf;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.report.color, ColorMode::Auto);
        assert!(config.report.base_path.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[report]
color = "never"
base_path = "/home/user/project"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.report.color, ColorMode::Never);
        assert_eq!(
            config.report.base_path,
            Some(PathBuf::from("/home/user/project"))
        );
    }

    #[test]
    fn invalid_color_mode_errors() {
        let toml = r#"
[report]
color = "sometimes"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn relative_base_path_errors() {
        let toml = r#"
[report]
base_path = "project/src"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("herald.toml"),
            "[report]\ncolor = \"always\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.report.color, ColorMode::Always);
    }

    #[test]
    fn missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
