//! Repository trait for order data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{AddOrderItem, CreateOrder, Order, OrderItem, OrderQuery, UpdateOrder};

/// Repository abstraction for order persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders matching the optional email and status filters, newest first
    async fn list(&self, filter: OrderQuery) -> OrderResult<Vec<Order>>;

    /// Find an order by ID
    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;

    /// Create an order from checkout fields
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    /// Partially update an order
    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order>;

    /// Delete an order and, through the schema, its items
    async fn delete(&self, id: Uuid) -> OrderResult<bool>;

    /// Add a product line to an order
    async fn add_item(&self, order_id: Uuid, input: AddOrderItem) -> OrderResult<OrderItem>;

    /// The order's product lines, products embedded
    async fn items_for_order(&self, order_id: Uuid) -> OrderResult<Vec<OrderItem>>;
}
