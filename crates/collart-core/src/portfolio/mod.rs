//! Portfolio domain module.

mod model;
mod service;

pub use model::{NewPortfolioProject, PortfolioProject};
pub use service::PortfolioService;
