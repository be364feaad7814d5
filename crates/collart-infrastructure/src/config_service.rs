//! Configuration service implementation.
//!
//! Loads `ClientConfig` from `config.toml`, writes a default file on first
//! run, and applies environment overrides on top.

use crate::paths::CollartPaths;
use crate::storage::AtomicTomlFile;
use collart_core::Language;
use collart_core::config::ClientConfig;
use collart_core::error::{CollartError, Result};
use std::path::PathBuf;

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "COLLART_BASE_URL";
/// Overrides `language`.
pub const ENV_LANGUAGE: &str = "COLLART_LANGUAGE";

/// Configuration service backed by a TOML file.
pub struct ConfigService {
    file: AtomicTomlFile<ClientConfig>,
}

impl ConfigService {
    pub fn new(paths: &CollartPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| CollartError::config(format!("Failed to resolve config path: {e}")))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Loads the configuration, creating the file with defaults if missing,
    /// then applies environment overrides.
    pub fn load(&self) -> Result<ClientConfig> {
        let config = match self.file.load()? {
            Some(config) => config,
            None => {
                let config = ClientConfig::default();
                tracing::info!(
                    target: "collart::config",
                    "Writing default config to {}",
                    self.file.path().display()
                );
                self.file.save(&config)?;
                config
            }
        };

        Ok(apply_overrides(config, |key| std::env::var(key).ok()))
    }

    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        self.file.save(config)
    }
}

/// Applies overrides found through `lookup` (the environment in production).
pub fn apply_overrides(
    mut config: ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().to_string();
    }
    if let Some(language) = lookup(ENV_LANGUAGE) {
        config.language = Language::from_code(&language);
    }
    config
}
