//! Order service trait.

use super::model::{NewOrder, Order, TabKind};
use crate::error::Result;
use async_trait::async_trait;

/// Order capabilities of the backend.
///
/// Implemented by the REST client; view models depend on this trait only so
/// they can be driven by fakes in tests.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// All published orders visible to the current user.
    async fn search_orders(&self) -> Result<Vec<Order>>;

    /// Publishes a new order and returns it as stored by the server.
    async fn create_order(&self, order: &NewOrder) -> Result<Order>;

    /// Deletes an order owned by the current user.
    async fn delete_order(&self, order_id: &str) -> Result<()>;

    /// Orders in one of a user's tabs (liked, active, collaborations).
    async fn tab_orders(&self, kind: TabKind, user_id: &str) -> Result<Vec<Order>>;

    /// Adds an order to the current user's favorites.
    async fn add_liked(&self, order_id: &str) -> Result<()>;

    /// Removes an order from the current user's favorites.
    async fn remove_liked(&self, order_id: &str) -> Result<()>;
}
