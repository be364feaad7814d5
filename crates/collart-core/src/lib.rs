//! Domain layer of the Collart client.
//!
//! Entities, the interaction state machine, feed filters, the session
//! context and the narrow service traits the REST client implements.

pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod experience;
pub mod filter;
pub mod interaction;
pub mod language;
pub mod order;
pub mod portfolio;
pub mod session;
pub mod settings;
pub mod skill;
pub mod upload;
pub mod user;

// Re-export common types
pub use error::{CollartError, Result};
pub use experience::Experience;
pub use language::Language;
pub use session::Session;
