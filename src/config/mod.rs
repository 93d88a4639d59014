//! Configuration module for toolfinder
//!
//! Settings come from an optional TOML file in the user's config directory
//! (`~/.config/toolfinder/config.toml` on Linux). The file is never written
//! by the tool; missing keys fall back to defaults and command-line flags
//! override both.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pager::DEFAULT_PAGE_SIZE;

/// Database file used when neither config nor CLI name one
pub const DEFAULT_DATABASE: &str = "tools_database.txt";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FinderConfig {
    /// Path to the tool database file
    pub database: PathBuf,

    /// Records shown per page
    pub page_size: usize,

    /// Colored console output
    pub color: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            page_size: DEFAULT_PAGE_SIZE,
            color: true,
        }
    }
}

impl FinderConfig {
    /// Path of the config file under a config directory
    #[must_use]
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join("toolfinder").join("config.toml")
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_in(dirs::config_dir().as_deref())
    }

    /// Load `toolfinder/config.toml` under `config_dir`
    ///
    /// Without a config directory there is no file to read, so the defaults
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_in(config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        match config_dir {
            Some(dir) => Self::load_from(&Self::config_path(dir)),
            None => {
                tracing::debug!("no config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file, which may be absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        config.validate()
    }

    /// Reject settings the rest of the program cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
