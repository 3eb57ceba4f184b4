use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create order_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(OrderStatus::Enum)
                    .values([
                        OrderStatus::Pending,
                        OrderStatus::Active,
                        OrderStatus::Completed,
                        OrderStatus::Cancelled,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create customer_orders table
        manager
            .create_table(
                Table::create()
                    .table(CustomerOrders::Table)
                    .if_not_exists()
                    .col(pk_uuid(CustomerOrders::Id))
                    .col(string(CustomerOrders::Name))
                    .col(string(CustomerOrders::Lastname))
                    .col(string(CustomerOrders::Phone))
                    .col(string(CustomerOrders::Email))
                    .col(string_null(CustomerOrders::Company))
                    .col(string(CustomerOrders::Address))
                    .col(string_null(CustomerOrders::Apartment))
                    .col(string(CustomerOrders::PostalCode))
                    .col(string(CustomerOrders::City))
                    .col(string(CustomerOrders::Country))
                    .col(string_null(CustomerOrders::OrderNotice))
                    .col(
                        ColumnDef::new(CustomerOrders::Status)
                            .enumeration(
                                OrderStatus::Enum,
                                [
                                    OrderStatus::Pending,
                                    OrderStatus::Active,
                                    OrderStatus::Completed,
                                    OrderStatus::Cancelled,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(integer(CustomerOrders::Total))
                    .col(
                        timestamp_with_time_zone(CustomerOrders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CustomerOrders::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_orders_email")
                    .table(CustomerOrders::Table)
                    .col(CustomerOrders::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_customer_orders_status")
                    .table(CustomerOrders::Table)
                    .col(CustomerOrders::Status)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER customer_orders_touch_updated_at
                    BEFORE UPDATE ON customer_orders
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
                "DROP TRIGGER IF EXISTS customer_orders_touch_updated_at ON customer_orders",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CustomerOrders::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(OrderStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CustomerOrders {
    Table,
    Id,
    Name,
    Lastname,
    Phone,
    Email,
    Company,
    Address,
    Apartment,
    PostalCode,
    City,
    Country,
    OrderNotice,
    Status,
    Total,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderStatus {
    #[sea_orm(iden = "order_status")]
    Enum,
    #[sea_orm(iden = "pending")]
    Pending,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "completed")]
    Completed,
    #[sea_orm(iden = "cancelled")]
    Cancelled,
}
