//! Storage layer for atomic file operations.

mod atomic_toml;
mod settings_storage;

pub use atomic_toml::AtomicTomlFile;
pub use settings_storage::TomlSettingsStore;
