use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{CatalogError, CatalogResult},
    models::{
        Category, CreateCategory, CreateProduct, Product, SearchPage, SearchParams, UpdateCategory,
        UpdateProduct,
    },
    query::CompiledListing,
    repository::{CategoryRepository, ProductRepository},
};

pub struct PgProductRepository {
    base: BaseRepository<entity::product::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Category ids whose name contains the search category parameter
    async fn resolve_search_categories(&self, category: &str) -> CatalogResult<Vec<Uuid>> {
        let categories = entity::category::Entity::find()
            .filter(entity::category::Column::Name.contains(category))
            .all(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(categories.into_iter().map(|c| c.id).collect())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> CatalogResult<Product> {
        let exists = entity::product::Entity::find()
            .filter(entity::product::Column::Slug.eq(&input.slug))
            .one(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
            .is_some();

        if exists {
            return Err(CatalogError::DuplicateSlug(input.slug));
        }

        let product = Product::new(input);
        let active_model: entity::product::ActiveModel = product.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let row = entity::product::Entity::find_by_id(id)
            .find_also_related(entity::category::Entity)
            .one(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(row.map(|pair| pair.into()))
    }

    async fn list(&self, listing: CompiledListing) -> CatalogResult<Vec<Product>> {
        // The admin listing is the raw table, without the category join
        if listing.admin {
            let models = self
                .base
                .find_all()
                .await
                .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;
            return Ok(models.into_iter().map(|m| m.into()).collect());
        }

        let mut condition = listing.condition;

        if let Some(name) = listing.category_name {
            let category = entity::category::Entity::find()
                .filter(entity::category::Column::Name.eq(&name))
                .one(self.base.db())
                .await
                .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

            // Filtering on a category nobody has means an empty page
            let Some(category) = category else {
                return Ok(Vec::new());
            };
            condition = condition.add(entity::product::Column::CategoryId.eq(category.id));
        }

        let mut query = entity::product::Entity::find()
            .filter(condition)
            .find_also_related(entity::category::Entity);

        if let Some((column, order)) = listing.order {
            query = query.order_by(column, order);
        }
        if let Some((offset, limit)) = listing.pagination {
            query = query.offset(offset).limit(limit);
        }

        let rows = query
            .all(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(rows.into_iter().map(|pair| pair.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
            .ok_or(CatalogError::ProductNotFound(id))?;

        if let Some(ref new_slug) = input.slug {
            let slug_taken = entity::product::Entity::find()
                .filter(entity::product::Column::Slug.eq(new_slug))
                .filter(entity::product::Column::Id.ne(id))
                .one(self.base.db())
                .await
                .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
                .is_some();

            if slug_taken {
                return Err(CatalogError::DuplicateSlug(new_slug.clone()));
            }
        }

        let mut product: Product = model.into();
        product.apply_update(input);

        let active_model: entity::product::ActiveModel = product.into();
        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                CatalogError::ProductInUse(id)
            } else {
                CatalogError::Internal(format!("Database error: {}", e))
            }
        })?;

        if rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn search(&self, params: SearchParams) -> CatalogResult<SearchPage> {
        let mut condition = Condition::all();

        if let Some(ref category) = params.category {
            let category_ids = self.resolve_search_categories(category).await?;
            // An unresolvable category leaves the filter off, like the
            // listing grammar leaves malformed clauses off
            if !category_ids.is_empty() {
                condition =
                    condition.add(entity::product::Column::CategoryId.is_in(category_ids));
            }
        }

        if let Some(ref manufacturer) = params.manufacturer {
            condition =
                condition.add(entity::product::Column::Manufacturer.contains(manufacturer));
        }

        if let Some(ref text) = params.query {
            condition = condition.add(
                Condition::any()
                    .add(entity::product::Column::Title.contains(text))
                    .add(entity::product::Column::Description.contains(text)),
            );
        }

        let query = entity::product::Entity::find().filter(condition);

        let total_products = query
            .clone()
            .count(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        let models = query
            .offset((params.page - 1) * params.limit)
            .limit(params.limit)
            .all(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(SearchPage {
            products: models.into_iter().map(|m| m.into()).collect(),
            total_products,
            total_pages: total_products.div_ceil(params.limit),
            current_page: params.page,
        })
    }

    async fn manufacturers_by_category(
        &self,
        category: &str,
    ) -> CatalogResult<Option<Vec<String>>> {
        let category_ids = entity::category::Entity::find()
            .filter(entity::category::Column::Name.contains(category))
            .all(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
            .into_iter()
            .map(|c| c.id)
            .collect::<Vec<_>>();

        if category_ids.is_empty() {
            return Ok(None);
        }

        let manufacturers: Vec<String> = entity::product::Entity::find()
            .select_only()
            .column(entity::product::Column::Manufacturer)
            .filter(entity::product::Column::CategoryId.is_in(category_ids))
            .distinct()
            .order_by_asc(entity::product::Column::Manufacturer)
            .into_tuple()
            .all(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(Some(manufacturers))
    }
}

pub struct PgCategoryRepository {
    base: BaseRepository<entity::category::Entity>,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CatalogResult<Category> {
        let exists = self.find_by_name(&input.name).await?.is_some();
        if exists {
            return Err(CatalogError::DuplicateCategoryName(input.name));
        }

        let category = Category::new(input);
        let active_model: entity::category::ActiveModel = category.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(category_id = %model.id, "Created category");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let models = self
            .base
            .find_all()
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: Uuid, input: UpdateCategory) -> CatalogResult<Category> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
            .ok_or(CatalogError::CategoryNotFound(id))?;

        if let Some(ref new_name) = input.name {
            let name_taken = entity::category::Entity::find()
                .filter(entity::category::Column::Name.eq(new_name))
                .filter(entity::category::Column::Id.ne(id))
                .one(self.base.db())
                .await
                .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?
                .is_some();

            if name_taken {
                return Err(CatalogError::DuplicateCategoryName(new_name.clone()));
            }
        }

        let mut category: Category = model.into();
        category.apply_update(input);

        let active_model: entity::category::ActiveModel = category.into();
        let updated = self
            .base
            .update(active_model)
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(category_id = %id, "Updated category");
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(|e| {
            if e.is_foreign_key_violation() {
                CatalogError::CategoryInUse(id)
            } else {
                CatalogError::Internal(format!("Database error: {}", e))
            }
        })?;

        if rows_affected > 0 {
            tracing::info!(category_id = %id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Category>> {
        let model = entity::category::Entity::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.base.db())
            .await
            .map_err(|e| CatalogError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }
}
