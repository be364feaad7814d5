//! Authentication domain module.

mod model;
mod service;

pub use model::{Credentials, Registration};
pub use service::AuthService;
