//! Configuration file support.
//!
//! This module provides serialization and deserialization of application
//! settings, allowing users to export and import their configuration.

use serde::{Deserialize, Serialize};

use crate::category::{Category, default_categories};
use crate::constants::{cluster, fill};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Initialise the global logger for host binaries and tests.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .try_init();
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    pub preferences: UserPreferences,

    /// Paint category palette
    pub categories: Vec<CategoryConfig>,
}

fn default_app_name() -> String {
    "SPLAT".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Per-channel flood-fill tolerance
    #[serde(default = "default_fill_tolerance")]
    pub fill_tolerance: u8,

    /// Cluster count offered by default for segmentation
    #[serde(default = "default_cluster_count")]
    pub cluster_count: usize,
}

fn default_fill_tolerance() -> u8 {
    fill::DEFAULT_TOLERANCE
}

fn default_cluster_count() -> usize {
    cluster::DEFAULT_K
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            fill_tolerance: default_fill_tolerance(),
            cluster_count: default_cluster_count(),
        }
    }
}

/// Category configuration for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Display name of the category
    pub name: String,
    /// RGB color for the category
    pub color: [u8; 3],
}

impl From<&Category> for CategoryConfig {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            color: category.color,
        }
    }
}

impl From<CategoryConfig> for Category {
    fn from(config: CategoryConfig) -> Self {
        Category::new(&config.name, config.color)
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            categories: default_categories().iter().map(CategoryConfig::from).collect(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "splat-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("splat").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home| {
                home.join(".config")
                    .join("splat")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(&path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = AppConfig::new();
        let json = config.to_json().expect("serialize");
        let parsed = AppConfig::from_json(&json).expect("parse");

        assert_eq!(parsed.version, CONFIG_VERSION);
        assert_eq!(parsed.categories.len(), 4);
        assert_eq!(parsed.preferences.fill_tolerance, fill::DEFAULT_TOLERANCE);
        assert_eq!(parsed.preferences.cluster_count, cluster::DEFAULT_K);
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let json = format!(
            r#"{{"version": {}, "preferences": {{}}, "categories": []}}"#,
            CONFIG_VERSION + 1
        );
        assert!(matches!(
            AppConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_missing_preference_fields_use_defaults() {
        let json = format!(r#"{{"version": {CONFIG_VERSION}, "preferences": {{}}, "categories": []}}"#);
        let parsed = AppConfig::from_json(&json).expect("parse");
        assert_eq!(parsed.preferences.log_level, LogLevel::Info);
        assert_eq!(parsed.preferences.fill_tolerance, fill::DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_category_config_conversion() {
        let category = Category::new("Sea", [0, 0, 255]);
        let config = CategoryConfig::from(&category);
        let back: Category = config.into();
        assert_eq!(back, category);
    }
}
