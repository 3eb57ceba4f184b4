//! Postgres repository implementation for PC builds

use async_trait::async_trait;
use database::BaseRepository;
use domain_catalog::entity::product;
use domain_catalog::Product;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    entity,
    error::{BuildError, BuildResult},
    models::{CreatePcBuild, PcBuild, PcUsage, UpdatePcBuild},
    repository::BuildRepository,
};

/// Builds per listing page
const PAGE_SIZE: u64 = 12;

pub struct PgBuildRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgBuildRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn products_by_id(&self, ids: Vec<Uuid>) -> BuildResult<HashMap<Uuid, Product>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(self.base.db())
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| (m.id, m.into())).collect())
    }

    /// Resolve every populated component slot into its product.
    ///
    /// One query fetches the products of all builds at once; slots can
    /// share a product, so resolution clones out of the id map.
    async fn embed_components(&self, builds: Vec<PcBuild>) -> BuildResult<Vec<PcBuild>> {
        let ids = builds.iter().flat_map(|b| b.component_ids()).collect();
        let products = self.products_by_id(ids).await?;
        let resolve = |id: Option<Uuid>| id.and_then(|id| products.get(&id).cloned());

        Ok(builds
            .into_iter()
            .map(|mut build| {
                build.processor = resolve(build.processor_id);
                build.motherboard = resolve(build.motherboard_id);
                build.ram = resolve(build.ram_id);
                build.graphic_card = resolve(build.graphic_card_id);
                build.primary_storage = resolve(build.primary_storage_id);
                build.secondary_storage = resolve(build.secondary_storage_id);
                build.case = resolve(build.case_id);
                build.cooler = resolve(build.cooler_id);
                build.power_supply = resolve(build.power_supply_id);
                build.operating_system = resolve(build.operating_system_id);
                build
            })
            .collect())
    }

    async fn embed_one(&self, build: PcBuild) -> BuildResult<PcBuild> {
        let mut builds = self.embed_components(vec![build]).await?;
        builds
            .pop()
            .ok_or_else(|| BuildError::Internal("Embedding dropped the build".to_string()))
    }
}

#[async_trait]
impl BuildRepository for PgBuildRepository {
    async fn list(&self, usage: Option<PcUsage>, page: u64) -> BuildResult<Vec<PcBuild>> {
        let mut query = entity::Entity::find();
        if let Some(usage) = usage {
            query = query.filter(entity::Column::Usage.eq(usage));
        }

        let models = query
            .order_by_desc(entity::Column::CreatedAt)
            .offset((page - 1) * PAGE_SIZE)
            .limit(PAGE_SIZE)
            .all(self.base.db())
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?;

        self.embed_components(models.into_iter().map(|m| m.into()).collect())
            .await
    }

    async fn get_by_id(&self, id: Uuid) -> BuildResult<Option<PcBuild>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?;

        match model {
            Some(model) => Ok(Some(self.embed_one(model.into()).await?)),
            None => Ok(None),
        }
    }

    async fn for_usage(&self, usage: PcUsage) -> BuildResult<Vec<PcBuild>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Usage.eq(usage))
            .order_by_desc(entity::Column::CreatedAt)
            .all(self.base.db())
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?;

        self.embed_components(models.into_iter().map(|m| m.into()).collect())
            .await
    }

    async fn create(&self, usage: PcUsage, input: CreatePcBuild) -> BuildResult<PcBuild> {
        let build = PcBuild::new(usage, input);
        let active_model: entity::ActiveModel = build.into();

        // Component foreign keys reject ids of unknown products
        let model = self.base.insert(active_model).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                BuildError::UnknownComponent
            } else {
                BuildError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(build_id = %model.id, usage = %model.usage, "Created PC build");
        self.embed_one(model.into()).await
    }

    async fn update(
        &self,
        id: Uuid,
        usage: Option<PcUsage>,
        input: UpdatePcBuild,
    ) -> BuildResult<PcBuild> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?
            .ok_or(BuildError::BuildNotFound(id))?;

        let mut build: PcBuild = model.into();
        build.apply_update(usage, input);

        let updated = self
            .base
            .update(entity::ActiveModel::from(build))
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    BuildError::UnknownComponent
                } else {
                    BuildError::Internal(format!("Database error: {}", e))
                }
            })?;

        tracing::info!(build_id = %id, "Updated PC build");
        self.embed_one(updated.into()).await
    }

    async fn delete(&self, id: Uuid) -> BuildResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| BuildError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(build_id = %id, "Deleted PC build");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
