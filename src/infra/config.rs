//! Configuration management infrastructure.
//!
//! This module provides configuration file support for output rendering,
//! input size limits and default log filtering.

use crate::infra::error::{ExtractError, ExtractResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output encodings accepted in `output_encoding`.
pub const OUTPUT_ENCODINGS: [&str; 2] = ["raw", "hex"];

/// Log filters accepted in `log_level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfiguration {
    /// How extracted bytes are written: `raw` or `hex`
    pub output_encoding: String,

    /// Certificates larger than this are rejected before parsing
    pub max_certificate_bytes: u64,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ExtractorConfiguration {
    fn default() -> Self {
        Self {
            output_encoding: "raw".to_string(),
            max_certificate_bytes: 1024 * 1024,
            log_level: "warn".to_string(),
        }
    }
}

impl ExtractorConfiguration {
    /// Whether output is rendered as hex text.
    #[must_use]
    pub fn hex_output(&self) -> bool {
        self.output_encoding.eq_ignore_ascii_case("hex")
    }

    /// Validate configuration values
    pub fn validate(&self) -> ExtractResult<()> {
        if !OUTPUT_ENCODINGS
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&self.output_encoding))
        {
            return Err(ExtractError::ConfigurationError(format!(
                "Invalid output encoding: {} (expected raw or hex)",
                self.output_encoding
            )));
        }

        if self.max_certificate_bytes == 0 {
            return Err(ExtractError::ConfigurationError(
                "Maximum certificate size must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(&self.log_level))
        {
            return Err(ExtractError::ConfigurationError(format!(
                "Invalid log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }
}

/// Configuration manager for handling config files
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new configuration manager with default path
    pub fn new() -> ExtractResult<Self> {
        let config_path = Self::default_config_path()?;
        Ok(Self { config_path })
    }

    /// Create a configuration manager with custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> ExtractResult<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join("signer-keyid").join("config.toml"))
        } else {
            Ok(PathBuf::from("signer-keyid-config.toml"))
        }
    }

    /// Load configuration from file, falling back to defaults if it doesn't
    /// exist. Nothing is written.
    pub fn load_or_default(&self) -> ExtractResult<ExtractorConfiguration> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "Configuration file not found, using defaults: {}",
                self.config_path.display()
            );
            Ok(ExtractorConfiguration::default())
        }
    }

    /// Load configuration from file
    pub fn load(&self) -> ExtractResult<ExtractorConfiguration> {
        log::debug!("Loading configuration from: {}", self.config_path.display());

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            ExtractError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        let config: ExtractorConfiguration = toml::from_str(&content).map_err(|e| {
            ExtractError::ConfigurationError(format!("Failed to parse config file: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &ExtractorConfiguration) -> ExtractResult<()> {
        log::info!("Saving configuration to: {}", self.config_path.display());

        config.validate()?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ExtractError::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| {
            ExtractError::ConfigurationError(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&self.config_path, content).map_err(|e| {
            ExtractError::ConfigurationError(format!(
                "Failed to write config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Update a specific configuration value
    pub fn update_value(&self, key: &str, value: &str) -> ExtractResult<()> {
        let mut config = self.load_or_default()?;

        match key {
            "output_encoding" => {
                config.output_encoding = value.to_ascii_lowercase();
            }
            "max_certificate_bytes" => {
                config.max_certificate_bytes = value.parse().map_err(|_| {
                    ExtractError::ConfigurationError(format!("Invalid size value: {value}"))
                })?;
            }
            "log_level" => {
                config.log_level = value.to_ascii_lowercase();
            }
            _ => {
                return Err(ExtractError::ConfigurationError(format!(
                    "Unknown configuration key: {key}"
                )));
            }
        }

        self.save(&config)
    }

    /// Get the configuration file path
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Export configuration as a portable format
    pub fn export_config(&self, format: ExportFormat) -> ExtractResult<String> {
        let config = self.load_or_default()?;

        match format {
            ExportFormat::Toml => toml::to_string_pretty(&config)
                .map_err(|e| ExtractError::ConfigurationError(format!("TOML export failed: {e}"))),
            ExportFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| ExtractError::ConfigurationError(format!("JSON export failed: {e}"))),
            ExportFormat::Yaml => serde_yaml::to_string(&config)
                .map_err(|e| ExtractError::ConfigurationError(format!("YAML export failed: {e}"))),
        }
    }

    /// Import configuration from a string
    pub fn import_config(&self, content: &str, format: ExportFormat) -> ExtractResult<()> {
        let config: ExtractorConfiguration = match format {
            ExportFormat::Toml => toml::from_str(content).map_err(|e| {
                ExtractError::ConfigurationError(format!("TOML import failed: {e}"))
            })?,
            ExportFormat::Json => serde_json::from_str(content).map_err(|e| {
                ExtractError::ConfigurationError(format!("JSON import failed: {e}"))
            })?,
            ExportFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
                ExtractError::ConfigurationError(format!("YAML import failed: {e}"))
            })?,
        };

        self.save(&config)
    }
}

/// Configuration export/import formats
#[derive(Debug, Clone, Copy)]
pub enum ExportFormat {
    Toml,
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_configuration() {
        let config = ExtractorConfiguration::default();
        assert_eq!(config.output_encoding, "raw");
        assert!(!config.hex_output());
        assert_eq!(config.max_certificate_bytes, 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ExtractorConfiguration {
            output_encoding: "hex".to_string(),
            ..ExtractorConfiguration::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ExtractorConfiguration = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
        assert!(deserialized.hex_output());
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_keys() {
        let config: ExtractorConfiguration = toml::from_str("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_encoding, "raw");
    }

    #[test]
    fn test_missing_file_yields_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");
        let manager = ConfigManager::with_path(&config_path);

        let config = manager.load_or_default().unwrap();
        assert_eq!(config, ExtractorConfiguration::default());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_update_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(&config_path);

        manager.update_value("output_encoding", "HEX").unwrap();
        manager.update_value("max_certificate_bytes", "4096").unwrap();
        assert!(config_path.exists());

        let loaded = manager.load().unwrap();
        assert!(loaded.hex_output());
        assert_eq!(loaded.max_certificate_bytes, 4096);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("config.toml"));

        assert!(matches!(
            manager.update_value("output_encoding", "base64"),
            Err(ExtractError::ConfigurationError(_))
        ));
        assert!(matches!(
            manager.update_value("max_certificate_bytes", "0"),
            Err(ExtractError::ConfigurationError(_))
        ));
        assert!(matches!(
            manager.update_value("max_certificate_bytes", "lots"),
            Err(ExtractError::ConfigurationError(_))
        ));
        assert!(matches!(
            manager.update_value("colour", "blue"),
            Err(ExtractError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "log_level = \"loud\"\n").unwrap();

        let err = ConfigManager::with_path(&config_path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_export_import_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let source = ConfigManager::with_path(temp_dir.path().join("source.toml"));
        source.update_value("log_level", "info").unwrap();

        for format in [ExportFormat::Toml, ExportFormat::Json, ExportFormat::Yaml] {
            let exported = source.export_config(format).unwrap();
            let target = ConfigManager::with_path(temp_dir.path().join("target.toml"));
            target.import_config(&exported, format).unwrap();
            assert_eq!(target.load().unwrap().log_level, "info");
        }
    }
}
