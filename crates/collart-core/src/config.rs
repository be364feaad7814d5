use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Backend host used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.collart.app";

/// Client configuration as stored in `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub request_timeout_secs: Option<u64>,
    pub language: Language,
    /// Fallback filter for logging when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: None,
            language: Language::default(),
            log_level: "info".to_string(),
        }
    }
}
