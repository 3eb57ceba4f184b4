pub use sea_orm_migration::prelude::*;

mod m20250301_000000_bootstrap;
mod m20250301_000001_create_categories;
mod m20250301_000002_create_products;
mod m20250301_000003_create_cart_items;
mod m20250301_000004_create_wishlist_items;
mod m20250308_000000_create_addresses;
mod m20250308_000001_create_customer_orders;
mod m20250308_000002_create_order_items;
mod m20250315_000000_create_delivery_zones;
mod m20250322_000000_create_notifications;
mod m20250329_000000_create_product_ratings;
mod m20250412_000000_create_pc_builds;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000000_bootstrap::Migration),
            Box::new(m20250301_000001_create_categories::Migration),
            Box::new(m20250301_000002_create_products::Migration),
            Box::new(m20250301_000003_create_cart_items::Migration),
            Box::new(m20250301_000004_create_wishlist_items::Migration),
            Box::new(m20250308_000000_create_addresses::Migration),
            Box::new(m20250308_000001_create_customer_orders::Migration),
            Box::new(m20250308_000002_create_order_items::Migration),
            Box::new(m20250315_000000_create_delivery_zones::Migration),
            Box::new(m20250322_000000_create_notifications::Migration),
            Box::new(m20250329_000000_create_product_ratings::Migration),
            Box::new(m20250412_000000_create_pc_builds::Migration),
        ]
    }
}
