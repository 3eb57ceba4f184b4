//! Postgres repository implementation for addresses

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{AddressError, AddressResult},
    models::{Address, CreateAddress, UpdateAddress},
    repository::AddressRepository,
};

pub struct PgAddressRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Clear the default flag on a user's addresses, keeping one out
    async fn clear_defaults(&self, user_id: Uuid, except: Option<Uuid>) -> AddressResult<()> {
        let mut query = entity::Entity::update_many()
            .col_expr(entity::Column::IsDefault, Expr::value(false))
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::IsDefault.eq(true));

        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }

        query
            .exec(self.base.db())
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn for_user(&self, user_id: Uuid) -> AddressResult<Vec<Address>> {
        let models = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .order_by_desc(entity::Column::IsDefault)
            .all(self.base.db())
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, input: CreateAddress) -> AddressResult<Address> {
        // A new default demotes the user's existing one
        if input.is_default == Some(true) {
            self.clear_defaults(input.user_id, None).await?;
        }

        let address = Address::new(input);
        let active_model: entity::ActiveModel = address.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(address_id = %model.id, "Created address");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, input: UpdateAddress) -> AddressResult<Address> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?
            .ok_or(AddressError::AddressNotFound(id))?;

        if input.is_default == Some(true) {
            self.clear_defaults(model.user_id, Some(id)).await?;
        }

        let mut address: Address = model.into();
        address.apply_update(input);

        let updated = self
            .base
            .update(entity::ActiveModel::from(address))
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(address_id = %id, "Updated address");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> AddressResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| AddressError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(address_id = %id, "Deleted address");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
