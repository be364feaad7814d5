//! Error types for the Collart client.

use thiserror::Error;

/// A shared error type for the entire Collart client.
///
/// Every REST operation, storage call and view-model action surfaces this
/// type. Variants mirror the failure classes of a UI-bound REST client:
/// programmer errors (bad URL), session problems (missing token), transport
/// and status failures, and decoding problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollartError {
    /// URL could not be built from the configured base and endpoint path
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No bearer token in the session (never logged in or session expired)
    #[error("Missing authentication token")]
    MissingToken,

    /// Connectivity failure before any HTTP status was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    /// Server answered successfully but without a body
    #[error("Empty response body")]
    EmptyBody,

    /// Response body did not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Illegal interaction status change
    #[error("Invalid transition for interaction '{id}': {from} -> {to}")]
    InvalidTransition { id: String, from: String, to: String },

    /// Form input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The owning view scope was closed while the call was in flight
    #[error("Operation cancelled")]
    Cancelled,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error of local files
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CollartError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// True when the session has to be re-established (no token or 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::Status { status: 401, .. }
        )
    }

    /// Check if this is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CollartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CollartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CollartError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CollartError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CollartError>`.
pub type Result<T> = std::result::Result<T, CollartError>;
