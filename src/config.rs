//! Settings file management
//!
//! Settings are stored at `~/.config/itemproc/config.toml` (XDG standard)
//! unless a path is given explicitly. A missing default file means defaults.
//!
//! ```toml
//! [processing]
//! batch_size = 100
//! timeout_seconds = 30
//! retry_count = 3
//!
//! [database]
//! host = "localhost"
//! port = 5432
//! name = "testdb"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::{DatabaseConfig, ProcessingConfig};

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "config.toml";

/// Errors from loading, saving or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read or written
    #[error("settings file {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for this schema
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Settings could not be rendered as TOML
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Settings parsed but hold unusable values
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Top-level itemproc settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Processing limits
    #[serde(default)]
    pub processing: ProcessingConfig,
    /// Database connection parameters
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Settings {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("itemproc")
    }

    /// Get the default settings file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }

    /// Load settings from the default path, or defaults if it does not exist
    pub fn load() -> Result<Self, SettingsError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("no settings file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load settings from an explicit path (the file must exist)
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded settings from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as TOML text
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save settings to a path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// Check that every value is usable
    ///
    /// The reserved fields are still validated so that a settings file stays
    /// meaningful once they are consulted.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.processing.batch_size == 0 {
            return Err(SettingsError::Invalid("processing.batch_size must be positive".into()));
        }
        if self.database.host.trim().is_empty() {
            return Err(SettingsError::Invalid("database.host cannot be empty".into()));
        }
        if self.database.port == 0 {
            return Err(SettingsError::Invalid("database.port must be positive".into()));
        }
        if self.database.name.trim().is_empty() {
            return Err(SettingsError::Invalid("database.name cannot be empty".into()));
        }
        Ok(())
    }
}
