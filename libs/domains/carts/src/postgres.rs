use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use database::BaseRepository;
use domain_catalog::entity::product;
use domain_catalog::Product;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{CartError, CartResult},
    models::{AddToCart, CartAddition, CartItem},
    repository::CartRepository,
};

pub struct PgCartRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCartRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Products referenced by a set of cart rows, keyed by product id
    async fn products_by_id(&self, ids: Vec<Uuid>) -> CartResult<HashMap<Uuid, Product>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(self.base.db())
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| (m.id, m.into())).collect())
    }

    async fn embed_product(&self, mut item: CartItem) -> CartResult<CartItem> {
        let model = product::Entity::find_by_id(item.product_id)
            .one(self.base.db())
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        item.product = model.map(|m| m.into());
        Ok(item)
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn items_for_user(&self, user_id: Uuid) -> CartResult<Vec<CartItem>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .all(self.base.db())
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        let product_ids = rows.iter().map(|r| r.product_id).collect();
        let mut products = self.products_by_id(product_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut item: CartItem = row.into();
                item.product = products.remove(&item.product_id);
                item
            })
            .collect())
    }

    async fn add(&self, input: AddToCart) -> CartResult<CartAddition> {
        let existing = entity::Entity::find()
            .filter(entity::Column::UserId.eq(input.user_id))
            .filter(entity::Column::ProductId.eq(input.product_id))
            .one(self.base.db())
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        // A second add of the same product stacks onto the existing row
        if let Some(row) = existing {
            let mut item: CartItem = row.into();
            item.quantity += input.quantity.unwrap_or(1);
            item.updated_at = Utc::now();

            let updated = self
                .base
                .update(entity::ActiveModel::from(item))
                .await
                .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

            tracing::info!(cart_item_id = %updated.id, "Incremented cart item quantity");
            let item = self.embed_product(updated.into()).await?;
            return Ok(CartAddition {
                item,
                created: false,
            });
        }

        let product_id = input.product_id;
        let item = CartItem::new(input);
        let active_model: entity::ActiveModel = item.into();

        let model = self.base.insert(active_model).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                CartError::ProductNotFound(product_id)
            } else {
                CartError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(cart_item_id = %model.id, "Added product to cart");
        let item = self.embed_product(model.into()).await?;
        Ok(CartAddition {
            item,
            created: true,
        })
    }

    async fn update_quantity(&self, id: Uuid, quantity: i32) -> CartResult<CartItem> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?
            .ok_or(CartError::CartItemNotFound(id))?;

        let mut item: CartItem = model.into();
        item.quantity = quantity;
        item.updated_at = Utc::now();

        let updated = self
            .base
            .update(entity::ActiveModel::from(item))
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(cart_item_id = %id, quantity, "Updated cart item quantity");
        self.embed_product(updated.into()).await
    }

    async fn delete(&self, id: Uuid) -> CartResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(cart_item_id = %id, "Removed cart item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn clear_for_user(&self, user_id: Uuid) -> CartResult<u64> {
        let result = entity::Entity::delete_many()
            .filter(entity::Column::UserId.eq(user_id))
            .exec(self.base.db())
            .await
            .map_err(|e| CartError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(user_id = %user_id, removed = result.rows_affected, "Cleared cart");
        Ok(result.rows_affected)
    }
}
