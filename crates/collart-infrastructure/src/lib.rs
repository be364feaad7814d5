//! Infrastructure layer of the Collart client.
//!
//! Wire DTOs with their domain transformers, file-backed settings and
//! configuration, and path resolution.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod upload_loader;

pub use crate::config_service::ConfigService;
pub use crate::paths::CollartPaths;
pub use crate::storage::TomlSettingsStore;
pub use crate::upload_loader::{guess_mime_type, load_upload_file};
