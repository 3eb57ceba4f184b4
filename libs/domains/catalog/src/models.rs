use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Slugs are lowercase alphanumerics separated by hyphens
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if !SLUG_PATTERN.is_match(slug) {
        return Err(validator::ValidationError::new("invalid_slug"));
    }
    Ok(())
}

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier
    pub id: Uuid,
    /// Category name (unique)
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// DTO for renaming a category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
}

/// Storefront product
///
/// Prices are integer cents. `in_stock` is a 0/1 flag rather than a count,
/// mirroring what the storefront displays. The category is embedded when the
/// query joined it and omitted from JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// URL slug (unique)
    pub slug: String,
    pub title: String,
    pub description: String,
    pub main_image: String,
    /// Price in integer cents
    pub price: i32,
    /// Star rating shown on the storefront (0..=5)
    pub rating: i32,
    pub manufacturer: String,
    /// Stock flag: 1 in stock, 0 out of stock
    pub in_stock: i32,
    pub category_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100), custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_image: String,
    #[validate(range(min = 0))]
    pub price: i32,
    /// Defaults to 5 when omitted
    #[validate(range(min = 0, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub manufacturer: String,
    /// Defaults to 1 (in stock) when omitted
    #[validate(range(min = 0, max = 1))]
    pub in_stock: Option<i32>,
    pub category_id: Uuid,
}

/// DTO for updating a product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100), custom(function = "validate_slug"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub main_image: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(range(min = 0, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub manufacturer: Option<String>,
    #[validate(range(min = 0, max = 1))]
    pub in_stock: Option<i32>,
    pub category_id: Option<Uuid>,
}

/// Query parameters for product search
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    /// Substring matched against title and description
    pub query: Option<String>,
    /// Category name substring
    pub category: Option<String>,
    /// Manufacturer substring
    pub manufacturer: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_search_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_search_limit() -> u64 {
    10
}

/// One page of search results
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchPage {
    pub products: Vec<Product>,
    pub total_products: u64,
    pub total_pages: u64,
    pub current_page: u64,
}

/// Query parameters for the manufacturers listing
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ManufacturersParams {
    /// Category name substring (required)
    pub category: Option<String>,
}

/// Distinct manufacturer names within the matched categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManufacturersResponse {
    pub manufacturers: Vec<String>,
}

/// Query parameters for resolving a category from a PC usage profile
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct UsageParams {
    /// Usage profile, resolved against the category named `<usage>-pc`
    pub usage: Option<String>,
}

impl Category {
    pub fn new(input: CreateCategory) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateCategory) {
        if let Some(name) = update.name {
            self.name = name;
        }
        self.updated_at = Utc::now();
    }
}

impl Product {
    /// Create a new product from the CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            slug: input.slug,
            title: input.title,
            description: input.description,
            main_image: input.main_image,
            price: input.price,
            rating: input.rating.unwrap_or(5),
            manufacturer: input.manufacturer,
            in_stock: input.in_stock.unwrap_or(1),
            category_id: input.category_id,
            category: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from the UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(main_image) = update.main_image {
            self.main_image = main_image;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(manufacturer) = update.manufacturer {
            self.manufacturer = manufacturer;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_defaults_rating_and_stock() {
        let product = Product::new(CreateProduct {
            slug: "test-gpu".to_string(),
            title: "Test GPU".to_string(),
            description: String::new(),
            main_image: String::new(),
            price: 49999,
            rating: None,
            manufacturer: "Acme".to_string(),
            in_stock: None,
            category_id: Uuid::now_v7(),
        });

        assert_eq!(product.rating, 5);
        assert_eq!(product.in_stock, 1);
    }

    #[test]
    fn new_product_keeps_explicit_rating_and_stock() {
        let product = Product::new(CreateProduct {
            slug: "test-gpu".to_string(),
            title: "Test GPU".to_string(),
            description: String::new(),
            main_image: String::new(),
            price: 49999,
            rating: Some(3),
            manufacturer: "Acme".to_string(),
            in_stock: Some(0),
            category_id: Uuid::now_v7(),
        });

        assert_eq!(product.rating, 3);
        assert_eq!(product.in_stock, 0);
    }

    #[test]
    fn slug_validation_rejects_uppercase_and_spaces() {
        let mut input = CreateProduct {
            slug: "Mixed Case".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            main_image: String::new(),
            price: 100,
            rating: None,
            manufacturer: "Acme".to_string(),
            in_stock: None,
            category_id: Uuid::now_v7(),
        };
        assert!(input.validate().is_err());

        input.slug = "mixed-case-2".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn product_serializes_without_category_when_absent() {
        let product = Product::new(CreateProduct {
            slug: "solo".to_string(),
            title: "Solo".to_string(),
            description: String::new(),
            main_image: String::new(),
            price: 100,
            rating: None,
            manufacturer: "Acme".to_string(),
            in_stock: None,
            category_id: Uuid::now_v7(),
        });

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("in_stock").is_some());
    }
}
