//! Persisted heading settings stored as TOML in the app root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::app_dirs::{AppDirError, AppDirs};
use crate::heading::SWAP_EDGE_TOLERANCE;
use crate::order::ColumnOrder;

pub use crate::app_dirs::CONFIG_FILE_NAME;
/// Upper bound accepted for a configured swap edge tolerance.
pub const MAX_SWAP_EDGE_TOLERANCE: f32 = 64.0;

/// Settings the demo owner keeps between launches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    /// Saved order of the draggable columns.
    pub column_order: ColumnOrder,
    pub swap_edge_tolerance: f32,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            column_order: ColumnOrder::default(),
            swap_edge_tolerance: SWAP_EDGE_TOLERANCE,
        }
    }
}

impl HeadingSettings {
    fn normalized(mut self) -> Self {
        self.swap_edge_tolerance = clamp_swap_edge_tolerance(self.swap_edge_tolerance);
        self
    }
}

/// Clamp a tolerance into `0..=MAX_SWAP_EDGE_TOLERANCE`, falling back to the default for NaN.
pub fn clamp_swap_edge_tolerance(value: f32) -> f32 {
    if value.is_nan() {
        return SWAP_EDGE_TOLERANCE;
    }
    value.clamp(0.0, MAX_SWAP_EDGE_TOLERANCE)
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    AppDirs::resolve()
        .and_then(|dirs| dirs.config_file())
        .map_err(ConfigError::from)
}

/// Load settings from the app root, returning defaults if the file is missing.
pub fn load_or_default() -> Result<HeadingSettings, ConfigError> {
    load_from(&config_path()?)
}

/// Persist settings to the app root, overwriting any previous contents.
pub fn save(settings: &HeadingSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

pub fn load_from(path: &Path) -> Result<HeadingSettings, ConfigError> {
    if !path.exists() {
        info!("No config at {}; using defaults", path.display());
        return Ok(HeadingSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: HeadingSettings =
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(settings.normalized())
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &HeadingSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

impl From<AppDirError> for ConfigError {
    fn from(error: AppDirError) -> Self {
        match error {
            AppDirError::NoBaseDir => ConfigError::NoConfigDir,
            AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
        }
    }
}
