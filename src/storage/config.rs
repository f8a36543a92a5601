//! Application configuration.
//!
//! Loaded from `config.toml` in the platform data directory; every section
//! falls back to its defaults when missing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the bootstrap admin password.
pub const ADMIN_PASSWORD_ENV: &str = "FITTRACK_ADMIN_PASSWORD";

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Database settings
    pub database: DatabaseSettings,
    /// Calorie model settings
    pub model: ModelSettings,
    /// Bootstrap administrator settings
    pub admin: AdminSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            database: DatabaseSettings::default(),
            model: ModelSettings::default(),
            admin: AdminSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl AppConfig {
    /// Full path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database.file_name)
    }
}

/// Database-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// File name inside the data directory
    pub file_name: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            file_name: "fitness_tracker.db".to_string(),
        }
    }
}

/// Calorie model settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Exercise dataset (User_ID, Gender, Age, Height, Weight, Duration, Heart_Rate, Body_Temp)
    pub exercise_csv: PathBuf,
    /// Calories dataset (User_ID, Calories)
    pub calories_csv: PathBuf,
    /// Number of trees in the forest
    pub n_estimators: usize,
    /// Seed for bootstrap sampling
    pub random_seed: u64,
    /// Maximum tree depth (unlimited when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node
    pub min_samples_split: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            exercise_csv: PathBuf::from("data/exercise.csv"),
            calories_csv: PathBuf::from("data/calories.csv"),
            n_estimators: 100,
            random_seed: 42,
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

/// Bootstrap administrator account settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Administrator username
    pub username: String,
    /// Administrator password, used only when the account is first created.
    /// Read from the file but never written back.
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

impl AdminSettings {
    /// Apply the password override from the environment, if set.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(password) = std::env::var(ADMIN_PASSWORD_ENV) {
            if !password.trim().is_empty() {
                self.password = password;
            }
        }
        self
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load application configuration from a specific file.
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a specific file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
