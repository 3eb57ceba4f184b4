//! Postgres repository implementation for wishlists

use std::collections::HashMap;

use async_trait::async_trait;
use database::BaseRepository;
use domain_catalog::entity::{category, product};
use domain_catalog::Product;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{WishlistError, WishlistResult},
    models::{AddToWishlist, WishlistItem},
    repository::WishlistRepository,
};

pub struct PgWishlistRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgWishlistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Products referenced by a set of wishlist rows, categories included,
    /// keyed by product id
    async fn products_by_id(&self, ids: Vec<Uuid>) -> WishlistResult<HashMap<Uuid, Product>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .find_also_related(category::Entity)
            .all(self.base.db())
            .await
            .map_err(|e| WishlistError::Internal(format!("Database error: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|pair| (pair.0.id, pair.into()))
            .collect())
    }

    async fn embed_product(&self, mut item: WishlistItem) -> WishlistResult<WishlistItem> {
        let row = product::Entity::find_by_id(item.product_id)
            .find_also_related(category::Entity)
            .one(self.base.db())
            .await
            .map_err(|e| WishlistError::Internal(format!("Database error: {}", e)))?;

        item.product = row.map(|pair| pair.into());
        Ok(item)
    }
}

#[async_trait]
impl WishlistRepository for PgWishlistRepository {
    async fn items_for_user(&self, user_id: Uuid) -> WishlistResult<Vec<WishlistItem>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .all(self.base.db())
            .await
            .map_err(|e| WishlistError::Internal(format!("Database error: {}", e)))?;

        let product_ids = rows.iter().map(|r| r.product_id).collect();
        let mut products = self.products_by_id(product_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut item: WishlistItem = row.into();
                item.product = products.remove(&item.product_id);
                item
            })
            .collect())
    }

    async fn add(&self, input: AddToWishlist) -> WishlistResult<WishlistItem> {
        let product_id = input.product_id;
        let item = WishlistItem::new(input);
        let active_model: entity::ActiveModel = item.into();

        // The unique (user_id, product_id) index rejects duplicate saves
        let model = self.base.insert(active_model).await.map_err(|e| {
            if e.is_unique_violation() {
                WishlistError::AlreadyInWishlist
            } else if e.is_foreign_key_violation() {
                WishlistError::ProductNotFound(product_id)
            } else {
                WishlistError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(wishlist_item_id = %model.id, "Saved product to wishlist");
        self.embed_product(model.into()).await
    }

    async fn delete(&self, id: Uuid) -> WishlistResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| WishlistError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(wishlist_item_id = %id, "Removed wishlist item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
