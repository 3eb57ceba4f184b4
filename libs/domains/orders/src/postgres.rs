//! Postgres repository implementation for orders

use std::collections::HashMap;

use async_trait::async_trait;
use database::BaseRepository;
use domain_catalog::entity::product;
use domain_catalog::Product;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{OrderError, OrderResult},
    models::{AddOrderItem, CreateOrder, Order, OrderItem, OrderQuery, UpdateOrder},
    repository::OrderRepository,
};

pub struct PgOrderRepository {
    base: BaseRepository<entity::order::Entity>,
    items: BaseRepository<entity::item::Entity>,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db.clone()),
            items: BaseRepository::new(db),
        }
    }

    /// Products referenced by a set of order lines, keyed by product id
    async fn products_by_id(&self, ids: Vec<Uuid>) -> OrderResult<HashMap<Uuid, Product>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(self.base.db())
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| (m.id, m.into())).collect())
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list(&self, filter: OrderQuery) -> OrderResult<Vec<Order>> {
        let mut query = entity::order::Entity::find();

        if let Some(email) = filter.email {
            query = query.filter(entity::order::Column::Email.eq(email));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        let models = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.base.db())
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);
        let active_model: entity::order::ActiveModel = order.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(order_id = %model.id, total = model.total, "Created order");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?
            .ok_or(OrderError::OrderNotFound(id))?;

        let mut order: Order = model.into();
        order.apply_update(input);

        let updated = self
            .base
            .update(entity::order::ActiveModel::from(order))
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(order_id = %id, status = %updated.status, "Updated order");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> OrderResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(order_id = %id, "Deleted order");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn add_item(&self, order_id: Uuid, input: AddOrderItem) -> OrderResult<OrderItem> {
        let product_id = input.product_id;
        let item = OrderItem::new(order_id, input);
        let active_model: entity::item::ActiveModel = item.into();

        let model = self.items.insert(active_model).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                OrderError::ProductNotFound(product_id)
            } else {
                OrderError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(order_id = %order_id, order_item_id = %model.id, "Added order line");

        let mut item: OrderItem = model.into();
        let mut products = self.products_by_id(vec![item.product_id]).await?;
        item.product = products.remove(&item.product_id);
        Ok(item)
    }

    async fn items_for_order(&self, order_id: Uuid) -> OrderResult<Vec<OrderItem>> {
        let rows = entity::item::Entity::find()
            .filter(entity::item::Column::OrderId.eq(order_id))
            .all(self.base.db())
            .await
            .map_err(|e| OrderError::Internal(format!("Database error: {}", e)))?;

        let product_ids = rows.iter().map(|r| r.product_id).collect();
        let products = self.products_by_id(product_ids).await?;

        // A product may sit on several lines of the same order
        Ok(rows
            .into_iter()
            .map(|row| {
                let mut item: OrderItem = row.into();
                item.product = products.get(&item.product_id).cloned();
                item
            })
            .collect())
    }
}
