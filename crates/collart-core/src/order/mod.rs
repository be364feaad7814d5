//! Order (project listing) domain module.
//!
//! # Module Structure
//!
//! - `model`: Order display model and the new-order request
//! - `service`: `OrderService` trait (search, publish, delete, favorites, tabs)

mod model;
mod service;

pub use model::{NewOrder, Order, TabKind};
pub use service::OrderService;
