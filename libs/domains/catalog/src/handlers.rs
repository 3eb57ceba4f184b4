//! HTTP handlers for the catalog API

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{
    Category, CreateCategory, CreateProduct, ManufacturersParams, ManufacturersResponse, Product,
    SearchPage, SearchParams, UpdateCategory, UpdateProduct, UsageParams,
};
use crate::query::ListingQuery;
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::{CategoryService, ProductService};

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
        search_products,
        get_manufacturers,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, SearchPage, ManufacturersResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = "Products", description = "Product catalog endpoints"))
)]
pub struct ProductsApiDoc;

/// OpenAPI documentation for the category endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
        get_category_by_usage,
    ),
    components(
        schemas(Category, CreateCategory, UpdateCategory),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = "Categories", description = "Category management endpoints"))
)]
pub struct CategoriesApiDoc;

/// Create the products router with all HTTP endpoints
pub fn products_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/manufacturers", get(get_manufacturers))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create the categories router with all HTTP endpoints
pub fn categories_router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/by-usage", get(get_category_by_usage))
        .route(
            "/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(shared_service)
}

/// List products, filtered through the `filters[<field>][$<op>]=<value>` grammar.
///
/// Filterable fields are price, rating, inStock, outOfStock, category and
/// manufacturer; operators are $gte, $lte, $gt, $lt and $equals. Malformed
/// pairs are skipped rather than rejected.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(
        ("mode" = Option<String>, Query, description = "`admin` returns every row without filters or paging"),
        ("sort" = Option<String>, Query, description = "One of titleAsc, titleDesc, lowPrice, highPrice"),
        ("page" = Option<u64>, Query, description = "1-based page of 12 products")
    ),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    RawQuery(raw): RawQuery,
) -> CatalogResult<Json<Vec<Product>>> {
    let listing = ListingQuery::parse(raw.as_deref().unwrap_or(""));
    let products = service.list_products(listing).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID, with its category embedded
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> CatalogResult<Json<Product>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search products by text query and/or category name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<SearchParams>,
) -> CatalogResult<Json<SearchPage>> {
    let page = service.search_products(params).await?;
    Ok(Json(page))
}

/// Distinct manufacturers within the categories matching a name
#[utoipa::path(
    get,
    path = "/manufacturers",
    tag = "Products",
    params(ManufacturersParams),
    responses(
        (status = 200, description = "Sorted distinct manufacturer names", body = ManufacturersResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_manufacturers<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<ManufacturersParams>,
) -> CatalogResult<Json<ManufacturersResponse>> {
    let response = service.manufacturers(params.category).await?;
    Ok(Json(response))
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CatalogResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CatalogResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<Category>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> CatalogResult<Json<Category>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<impl IntoResponse> {
    service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve the category for a PC usage profile (`<usage>-pc`)
#[utoipa::path(
    get,
    path = "/by-usage",
    tag = "Categories",
    params(UsageParams),
    responses(
        (status = 200, description = "Category for the usage profile", body = Category),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category_by_usage<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Query(params): Query<UsageParams>,
) -> CatalogResult<Json<Category>> {
    let category = service.category_by_usage(params.usage).await?;
    Ok(Json(category))
}
