//! TOML-backed settings store.

use super::atomic_toml::AtomicTomlFile;
use collart_core::error::Result;
use collart_core::settings::{SettingKey, SettingsStore};
use std::collections::BTreeMap;
use std::path::PathBuf;

type SettingsMap = BTreeMap<String, String>;

/// Persists settings as a flat `key = "value"` TOML table.
///
/// Every write goes through an atomic read-modify-write, so two processes
/// sharing the file do not lose each other's keys.
pub struct TomlSettingsStore {
    file: AtomicTomlFile<SettingsMap>,
}

impl TomlSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<String>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut values| values.remove(key.as_ref())))
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<()> {
        tracing::debug!(target: "collart::settings", key = key.as_ref(), "storing setting");
        self.file.update(SettingsMap::new(), |values| {
            values.insert(key.as_ref().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: SettingKey) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file.update(SettingsMap::new(), |values| {
            values.remove(key.as_ref());
        })
    }
}
