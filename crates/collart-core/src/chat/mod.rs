//! Chat domain module.

mod model;
mod service;

pub use model::{Chat, Message, OutgoingMessage};
pub use service::ChatService;
