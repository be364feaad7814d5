//! Unified path management for Collart configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/collart/           # Config directory (platform equivalent elsewhere)
//! ├── config.toml              # Client configuration
//! └── settings.toml            # Token, user id, language
//!
//! ~/.local/share/collart/      # Data directory
//! └── downloads/               # Downloaded attachments
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "collart";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves Collart paths, optionally under an explicit base directory.
///
/// A base directory replaces both the config and the data root, which keeps
/// tests and portable installs out of the user's home.
#[derive(Debug, Clone, Default)]
pub struct CollartPaths {
    base: Option<PathBuf>,
}

impl CollartPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Config directory, e.g. `~/.config/collart/`.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Data directory, e.g. `~/.local/share/collart/`.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn settings_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("settings.toml"))
    }

    pub fn downloads_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("downloads"))
    }
}
