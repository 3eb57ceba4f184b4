use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    Category, CreateCategory, CreateProduct, ManufacturersResponse, Product, SearchPage,
    SearchParams, UpdateCategory, UpdateProduct,
};
use crate::query::ListingQuery;
use crate::repository::{CategoryRepository, ProductRepository};

const SEARCH_LIMIT_MAX: u64 = 100;

/// Service layer for product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Run a parsed listing query
    pub async fn list_products(&self, listing: ListingQuery) -> CatalogResult<Vec<Product>> {
        self.repository.list(listing.compile()).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update a product
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: Uuid) -> CatalogResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CatalogError::ProductNotFound(id));
        }

        Ok(())
    }

    /// Search products; requires at least a text query or a category
    pub async fn search_products(&self, mut params: SearchParams) -> CatalogResult<SearchPage> {
        if params.query.is_none() && params.category.is_none() {
            return Err(CatalogError::Validation(
                "Either query or category parameter is required".to_string(),
            ));
        }

        params.page = params.page.max(1);
        params.limit = params.limit.clamp(1, SEARCH_LIMIT_MAX);

        self.repository.search(params).await
    }

    /// Distinct manufacturers for categories matching the given name
    pub async fn manufacturers(
        &self,
        category: Option<String>,
    ) -> CatalogResult<ManufacturersResponse> {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return Err(CatalogError::Validation(
                "Category parameter is required".to_string(),
            ));
        };

        let manufacturers = self
            .repository
            .manufacturers_by_category(&category)
            .await?
            .ok_or(CatalogError::NoMatchingCategory)?;

        Ok(ManufacturersResponse { manufacturers })
    }
}

/// Service layer for category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: Uuid) -> CatalogResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::CategoryNotFound(id))
    }

    /// Create a new category
    pub async fn create_category(&self, input: CreateCategory) -> CatalogResult<Category> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update a category
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategory,
    ) -> CatalogResult<Category> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a category
    pub async fn delete_category(&self, id: Uuid) -> CatalogResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CatalogError::CategoryNotFound(id));
        }

        Ok(())
    }

    /// Resolve the category backing a PC usage profile, named `<usage>-pc`
    pub async fn category_by_usage(&self, usage: Option<String>) -> CatalogResult<Category> {
        let Some(usage) = usage.filter(|u| !u.is_empty()) else {
            return Err(CatalogError::Validation(
                "Usage parameter is required".to_string(),
            ));
        };

        let name = format!("{}-pc", usage);
        self.repository
            .find_by_name(&name)
            .await?
            .ok_or(CatalogError::NoCategoryForUsage(usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockCategoryRepository, MockProductRepository};
    use chrono::Utc;

    fn category(name: &str) -> Category {
        let now = Utc::now();
        Category {
            id: Uuid::now_v7(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn search_requires_query_or_category() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service.search_products(SearchParams::default()).await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn search_clamps_limit_and_page() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_search()
            .withf(|params| params.page == 1 && params.limit == 100)
            .returning(|params| {
                Ok(SearchPage {
                    products: vec![],
                    total_products: 0,
                    total_pages: 0,
                    current_page: params.page,
                })
            });

        let service = ProductService::new(mock_repo);
        let params = SearchParams {
            query: Some("gpu".to_string()),
            category: None,
            manufacturer: None,
            page: 0,
            limit: 5000,
        };

        let page = service.search_products(params).await.unwrap();
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn manufacturers_requires_category_parameter() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service.manufacturers(None).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);
        let result = service.manufacturers(Some(String::new())).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn manufacturers_maps_unmatched_category_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_manufacturers_by_category()
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.manufacturers(Some("monitors".to_string())).await;

        assert!(matches!(result, Err(CatalogError::NoMatchingCategory)));
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let id = Uuid::now_v7();
        let result = service.delete_product(id).await;

        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn category_by_usage_appends_pc_suffix() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_find_by_name()
            .with(mockall::predicate::eq("gaming-pc"))
            .returning(|name| Ok(Some(category(name))));

        let service = CategoryService::new(mock_repo);
        let found = service
            .category_by_usage(Some("gaming".to_string()))
            .await
            .unwrap();

        assert_eq!(found.name, "gaming-pc");
    }

    #[tokio::test]
    async fn category_by_usage_requires_usage() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(mock_repo);

        let result = service.category_by_usage(None).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn category_by_usage_names_the_usage_in_404() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_find_by_name().returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.category_by_usage(Some("streaming".to_string())).await;

        match result {
            Err(CatalogError::NoCategoryForUsage(usage)) => assert_eq!(usage, "streaming"),
            other => panic!("expected NoCategoryForUsage, got {:?}", other.map(|c| c.name)),
        }
    }

    #[tokio::test]
    async fn create_product_rejects_invalid_input() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let input = CreateProduct {
            slug: "Not A Slug".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            main_image: String::new(),
            price: 100,
            rating: None,
            manufacturer: "Acme".to_string(),
            in_stock: None,
            category_id: Uuid::now_v7(),
        };

        let result = service.create_product(input).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}
