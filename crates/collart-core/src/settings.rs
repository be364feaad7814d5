//! Key-value settings persisted between app launches.

use crate::error::{CollartError, Result};
use std::collections::HashMap;
use std::sync::RwLock;
use strum::{AsRefStr, EnumIter};

/// Keys of the persisted settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum SettingKey {
    AuthToken,
    UserId,
    Language,
}

/// Abstract store for simple settings.
///
/// Implementations must be cheap to call from async code; values are tiny.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: SettingKey) -> Result<Option<String>>;

    fn set(&self, key: SettingKey, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: SettingKey) -> Result<()>;
}

/// Settings kept in memory only. Used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    values: RwLock<HashMap<SettingKey, String>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| CollartError::internal(format!("settings lock poisoned: {e}")))?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| CollartError::internal(format!("settings lock poisoned: {e}")))?;
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SettingKey) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| CollartError::internal(format!("settings lock poisoned: {e}")))?;
        values.remove(&key);
        Ok(())
    }
}
