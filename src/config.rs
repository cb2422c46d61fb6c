//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::data;
use crate::models::{SelectOption, StateRecord};

/// Smallest window size accepted in config.
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing, defaults apply.
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub reference: ReferenceConfig,
}

/// Window preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Also write a daily-rotated log file.
    pub file: bool,
}

/// Optional overrides of the builtin selector data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<SelectOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<StateRecord>>,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    ///
    /// Falls back to the executable's directory when no home directory is known.
    pub fn default_path() -> PathBuf {
        match project_dirs() {
            Some(dirs) => dirs.config_dir().join("config.toml"),
            None => std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("config.toml"),
        }
    }

    /// Directory for rotated log files.
    pub fn log_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Invalid(e),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<AppConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.window_width < MIN_WINDOW_WIDTH || self.ui.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "Window must be at least {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}"
            )));
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        if let Some(departments) = &self.reference.departments {
            data::validate_departments(departments)?;
        }
        if let Some(states) = &self.reference.states {
            data::validate_states(states)?;
        }
        Ok(())
    }

    /// Record the window size to restore on next launch.
    ///
    /// Sizes below the minimum window are raised to it. Returns `true` when
    /// the stored size changed.
    pub fn remember_window_size(&mut self, width: f32, height: f32) -> bool {
        let width = width.round().max(MIN_WINDOW_WIDTH);
        let height = height.round().max(MIN_WINDOW_HEIGHT);
        if width == self.ui.window_width && height == self.ui.window_height {
            return false;
        }
        self.ui.window_width = width;
        self.ui.window_height = height;
        true
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "hrnet")
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 900.0,
            window_height: 760.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.reference.departments.is_none());
    }

    #[test]
    fn test_parse_reference_overrides() {
        let config = AppConfig::parse(
            r#"
            [logging]
            level = "debug"

            [[reference.departments]]
            label = "Finance"
            value = "finance"

            [[reference.states]]
            name = "Oregon"
            abbreviation = "OR"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.reference.departments,
            Some(vec![SelectOption::new("Finance", "finance")])
        );
        assert_eq!(config.reference.states.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_state_record_missing_field_is_parse_error() {
        let result = AppConfig::parse(
            r#"
            [[reference.states]]
            name = "Oregon"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_blank_department_is_validation_error() {
        let result = AppConfig::parse(
            r#"
            [[reference.departments]]
            label = ""
            value = "x"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_unknown_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_window_size() {
        let mut config = AppConfig::default();
        config.ui.window_width = 10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_try_load_missing_file() {
        let path = std::env::temp_dir().join("hrnet_missing_config_for_test.toml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("hrnet_config_{}.toml", std::process::id()));
        let mut config = AppConfig::default();
        config.logging.file = true;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert!(loaded.logging.file),
            other => panic!("unexpected load result: {other:?}"),
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_remember_window_size() {
        let mut config = AppConfig::default();
        assert!(!config.remember_window_size(900.0, 760.0));

        assert!(config.remember_window_size(1024.4, 700.6));
        assert_eq!(config.ui.window_width, 1024.0);
        assert_eq!(config.ui.window_height, 701.0);

        assert!(config.remember_window_size(100.0, 50.0));
        assert_eq!(config.ui.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.ui.window_height, MIN_WINDOW_HEIGHT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_remembered_window_size_survives_reload() {
        let path = std::env::temp_dir()
            .join(format!("hrnet_window_{}", std::process::id()))
            .join("config.toml");
        let mut config = AppConfig::default();
        config.remember_window_size(1280.0, 720.0);
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => {
                assert_eq!(loaded.ui.window_width, 1280.0);
                assert_eq!(loaded.ui.window_height, 720.0);
            }
            other => panic!("unexpected load result: {other:?}"),
        }
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
