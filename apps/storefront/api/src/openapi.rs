use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "E-commerce storefront API for products, carts, wishlists, orders, delivery zones, ratings and PC builds"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_catalog::ProductsApiDoc),
        (path = "/categories", api = domain_catalog::CategoriesApiDoc),
        (path = "/cart", api = domain_carts::ApiDoc),
        (path = "/wishlist", api = domain_wishlists::ApiDoc),
        (path = "/addresses", api = domain_addresses::ApiDoc),
        (path = "/orders", api = domain_orders::ApiDoc),
        (path = "/delivery-zones", api = domain_delivery_zones::ApiDoc),
        (path = "/notifications", api = domain_notifications::ApiDoc),
        (path = "/ratings", api = domain_ratings::ApiDoc),
        (path = "/pc-builds", api = domain_builds::ApiDoc)
    )
)]
pub struct ApiDoc;
