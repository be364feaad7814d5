//! REST client of the Collart backend.
//!
//! [`CollartClient`] implements every service trait of `collart-core`, so the
//! application layer can hold it behind `Arc<dyn OrderService>` and friends.
//! One module per resource group keeps the endpoint mapping readable.

mod auth;
mod chat;
pub mod client;
mod interactions;
pub mod multipart;
mod orders;
mod portfolio;
mod profile;
mod transfer;

pub use crate::client::CollartClient;
