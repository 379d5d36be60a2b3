use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::logging::LogConfig;

/// Main application configuration
///
/// Configuration only shapes presentation and logging; it never changes a
/// calculated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Application metadata
    pub metadata: ConfigMetadata,

    /// Result presentation settings
    pub output: OutputSettings,

    /// Logging settings
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// How results are shown and exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Default export format
    pub format: ExportFormat,

    /// Colored terminal output
    pub color: bool,

    /// Show zone descriptions in the zone table
    pub show_descriptions: bool,
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        let now = Utc::now();

        ConfigMetadata {
            version: "1.0".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: ExportFormat::Text,
            color: true,
            show_descriptions: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".runtools")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is reported
    /// on stderr and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Ignoring config file {}: {:#}", config_path.display(), err);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save_default(&mut self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to_file(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.metadata.version, deserialized.metadata.version);
        assert_eq!(config.output, deserialized.output);
        assert_eq!(config.logging, deserialized.logging);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            format = "json"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, ExportFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.metadata.version, "1.0");
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original_config = AppConfig::default();
        original_config.output.show_descriptions = false;

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = AppConfig::load_from_file(&config_path).unwrap();

        assert!(!loaded_config.output.show_descriptions);
    }

    #[test]
    fn test_load_or_default_with_bad_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "output = [not toml").unwrap();

        let config = AppConfig::load_or_default(Some(config_path.as_path()));
        assert_eq!(config.output, OutputSettings::default());

        let missing_path = temp_dir.path().join("missing.toml");
        let missing = AppConfig::load_or_default(Some(missing_path.as_path()));
        assert_eq!(missing.output.format, ExportFormat::Text);
    }
}
