use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create addresses table
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(pk_uuid(Addresses::Id))
                    .col(uuid(Addresses::UserId))
                    .col(string(Addresses::Street))
                    .col(string_null(Addresses::Apartment))
                    .col(string(Addresses::City))
                    .col(string(Addresses::State))
                    .col(string(Addresses::PostalCode))
                    .col(string_null(Addresses::AddressType))
                    .col(boolean(Addresses::IsDefault).default(false))
                    .col(double_null(Addresses::Latitude))
                    .col(double_null(Addresses::Longitude))
                    .col(
                        timestamp_with_time_zone(Addresses::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Addresses::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_user_id")
                    .table(Addresses::Table)
                    .col(Addresses::UserId)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER addresses_touch_updated_at
                    BEFORE UPDATE ON addresses
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
            .execute_unprepared("DROP TRIGGER IF EXISTS addresses_touch_updated_at ON addresses")
            .await?;

        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    UserId,
    Street,
    Apartment,
    City,
    State,
    PostalCode,
    AddressType,
    IsDefault,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
