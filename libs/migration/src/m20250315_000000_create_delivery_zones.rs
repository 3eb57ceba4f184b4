use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create delivery_zones table
        manager
            .create_table(
                Table::create()
                    .table(DeliveryZones::Table)
                    .if_not_exists()
                    .col(pk_uuid(DeliveryZones::Id))
                    .col(string(DeliveryZones::Name))
                    .col(json(DeliveryZones::PostalCodes).default("[]"))
                    .col(integer_null(DeliveryZones::MinOrderAmount))
                    .col(integer(DeliveryZones::DeliveryFee).default(0))
                    .col(boolean(DeliveryZones::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(DeliveryZones::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(DeliveryZones::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_delivery_zones_is_active")
                    .table(DeliveryZones::Table)
                    .col(DeliveryZones::IsActive)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER delivery_zones_touch_updated_at
                    BEFORE UPDATE ON delivery_zones
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
                "DROP TRIGGER IF EXISTS delivery_zones_touch_updated_at ON delivery_zones",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DeliveryZones::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DeliveryZones {
    Table,
    Id,
    Name,
    PostalCodes,
    MinOrderAmount,
    DeliveryFee,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
