use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_ratings table
        manager
            .create_table(
                Table::create()
                    .table(ProductRatings::Table)
                    .if_not_exists()
                    .col(pk_uuid(ProductRatings::Id))
                    .col(uuid(ProductRatings::ProductId))
                    .col(uuid(ProductRatings::UserId))
                    .col(integer(ProductRatings::Rating))
                    .col(string_null(ProductRatings::Review))
                    .col(
                        timestamp_with_time_zone(ProductRatings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ProductRatings::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_ratings_product_id")
                            .from(ProductRatings::Table, ProductRatings::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_product_ratings_product_id")
                    .table(ProductRatings::Table)
                    .col(ProductRatings::ProductId)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER product_ratings_touch_updated_at
                    BEFORE UPDATE ON product_ratings
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS product_ratings_touch_updated_at ON product_ratings",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductRatings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductRatings {
    Table,
    Id,
    ProductId,
    UserId,
    Rating,
    Review,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}
