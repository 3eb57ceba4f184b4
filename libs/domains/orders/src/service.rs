//! Business logic for orders

use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{OrderError, OrderResult};
use crate::models::{AddOrderItem, CreateOrder, Order, OrderItem, OrderQuery, UpdateOrder};
use crate::repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_orders(&self, filter: OrderQuery) -> OrderResult<Vec<Order>> {
        self.repository.list(filter).await
    }

    pub async fn get_order(&self, id: Uuid) -> OrderResult<Order> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))
    }

    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn update_order(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    pub async fn delete_order(&self, id: Uuid) -> OrderResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(OrderError::OrderNotFound(id));
        }
        Ok(())
    }

    /// Add a product line to an order that must already exist
    pub async fn add_order_item(
        &self,
        order_id: Uuid,
        input: AddOrderItem,
    ) -> OrderResult<OrderItem> {
        input
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        self.repository
            .get_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        self.repository.add_item(order_id, input).await
    }

    pub async fn order_items(&self, order_id: Uuid) -> OrderResult<Vec<OrderItem>> {
        self.repository
            .get_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        self.repository.items_for_order(order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use crate::repository::MockOrderRepository;
    use mockall::predicate;

    fn create_input() -> CreateOrder {
        CreateOrder {
            name: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            address: "12 Main St".to_string(),
            apartment: None,
            postal_code: "62704".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            order_notice: None,
            status: None,
            total: 14900,
        }
    }

    #[tokio::test]
    async fn create_rejects_malformed_email_before_the_repository() {
        let repository = MockOrderRepository::new();
        let service = OrderService::new(repository);

        let result = service
            .create_order(CreateOrder {
                email: "nope".to_string(),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[tokio::test]
    async fn list_passes_filters_through() {
        let mut repository = MockOrderRepository::new();
        repository
            .expect_list()
            .withf(|filter| {
                filter.email.as_deref() == Some("ada@example.com")
                    && filter.status == Some(OrderStatus::Active)
            })
            .returning(|_| Ok(Vec::new()));
        let service = OrderService::new(repository);

        let orders = service
            .list_orders(OrderQuery {
                email: Some("ada@example.com".to_string()),
                status: Some(OrderStatus::Active),
            })
            .await
            .unwrap();

        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn get_missing_order_is_not_found() {
        let mut repository = MockOrderRepository::new();
        repository.expect_get_by_id().returning(|_| Ok(None));
        let service = OrderService::new(repository);

        let result = service.get_order(Uuid::now_v7()).await;

        assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
    }

    #[tokio::test]
    async fn add_item_to_missing_order_is_not_found() {
        let order_id = Uuid::now_v7();
        let mut repository = MockOrderRepository::new();
        repository
            .expect_get_by_id()
            .with(predicate::eq(order_id))
            .returning(|_| Ok(None));
        let service = OrderService::new(repository);

        let result = service
            .add_order_item(
                order_id,
                AddOrderItem {
                    product_id: Uuid::now_v7(),
                    quantity: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
    }

    #[tokio::test]
    async fn add_item_rejects_non_positive_quantity() {
        let repository = MockOrderRepository::new();
        let service = OrderService::new(repository);

        let result = service
            .add_order_item(
                Uuid::now_v7(),
                AddOrderItem {
                    product_id: Uuid::now_v7(),
                    quantity: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let mut repository = MockOrderRepository::new();
        repository.expect_delete().returning(|_| Ok(false));
        let service = OrderService::new(repository);

        let result = service.delete_order(Uuid::now_v7()).await;

        assert!(matches!(result, Err(OrderError::OrderNotFound(_))));
    }
}
