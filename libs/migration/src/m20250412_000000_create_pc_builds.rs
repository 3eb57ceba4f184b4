use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create pc_usage enum
        manager
            .create_type(
                Type::create()
                    .as_enum(PcUsage::Enum)
                    .values([
                        PcUsage::Gaming,
                        PcUsage::Productivity,
                        PcUsage::Content,
                        PcUsage::Development,
                        PcUsage::Streaming,
                        PcUsage::Workstation,
                        PcUsage::Budget,
                        PcUsage::Mini,
                        PcUsage::Student,
                        PcUsage::Custom,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create pc_builds table
        manager
            .create_table(
                Table::create()
                    .table(PcBuilds::Table)
                    .if_not_exists()
                    .col(pk_uuid(PcBuilds::Id))
                    .col(
                        ColumnDef::new(PcBuilds::Usage)
                            .enumeration(
                                PcUsage::Enum,
                                [
                                    PcUsage::Gaming,
                                    PcUsage::Productivity,
                                    PcUsage::Content,
                                    PcUsage::Development,
                                    PcUsage::Streaming,
                                    PcUsage::Workstation,
                                    PcUsage::Budget,
                                    PcUsage::Mini,
                                    PcUsage::Student,
                                    PcUsage::Custom,
                                ],
                            )
                            .not_null(),
                    )
                    .col(uuid_null(PcBuilds::ProductId))
                    .col(uuid_null(PcBuilds::ProcessorId))
                    .col(uuid_null(PcBuilds::MotherboardId))
                    .col(uuid_null(PcBuilds::RamId))
                    .col(uuid_null(PcBuilds::GraphicCardId))
                    .col(uuid_null(PcBuilds::PrimaryStorageId))
                    .col(uuid_null(PcBuilds::SecondaryStorageId))
                    .col(uuid_null(PcBuilds::CaseId))
                    .col(uuid_null(PcBuilds::CoolerId))
                    .col(uuid_null(PcBuilds::PowerSupplyId))
                    .col(uuid_null(PcBuilds::OperatingSystemId))
                    .col(
                        timestamp_with_time_zone(PcBuilds::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PcBuilds::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(&mut component_fk("fk_pc_builds_product_id", PcBuilds::ProductId))
                    .foreign_key(&mut component_fk("fk_pc_builds_processor_id", PcBuilds::ProcessorId))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_motherboard_id",
                        PcBuilds::MotherboardId,
                    ))
                    .foreign_key(&mut component_fk("fk_pc_builds_ram_id", PcBuilds::RamId))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_graphic_card_id",
                        PcBuilds::GraphicCardId,
                    ))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_primary_storage_id",
                        PcBuilds::PrimaryStorageId,
                    ))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_secondary_storage_id",
                        PcBuilds::SecondaryStorageId,
                    ))
                    .foreign_key(&mut component_fk("fk_pc_builds_case_id", PcBuilds::CaseId))
                    .foreign_key(&mut component_fk("fk_pc_builds_cooler_id", PcBuilds::CoolerId))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_power_supply_id",
                        PcBuilds::PowerSupplyId,
                    ))
                    .foreign_key(&mut component_fk(
                        "fk_pc_builds_operating_system_id",
                        PcBuilds::OperatingSystemId,
                    ))
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_pc_builds_usage")
                    .table(PcBuilds::Table)
                    .col(PcBuilds::Usage)
                    .to_owned(),
            )
            .await?;

        // Add updated_at trigger
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER pc_builds_touch_updated_at
                    BEFORE UPDATE ON pc_builds
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
            .execute_unprepared("DROP TRIGGER IF EXISTS pc_builds_touch_updated_at ON pc_builds")
            .await?;

        manager
            .drop_table(Table::drop().table(PcBuilds::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PcUsage::Enum).to_owned())
            .await?;

        Ok(())
    }
}

// Every component column references products and detaches on product deletion
fn component_fk(name: &str, column: PcBuilds) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(PcBuilds::Table, column)
        .to(Products::Table, Products::Id)
        .on_delete(ForeignKeyAction::SetNull)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum PcBuilds {
    Table,
    Id,
    Usage,
    ProductId,
    ProcessorId,
    MotherboardId,
    RamId,
    GraphicCardId,
    PrimaryStorageId,
    SecondaryStorageId,
    CaseId,
    CoolerId,
    PowerSupplyId,
    OperatingSystemId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum PcUsage {
    #[sea_orm(iden = "pc_usage")]
    Enum,
    #[sea_orm(iden = "gaming")]
    Gaming,
    #[sea_orm(iden = "productivity")]
    Productivity,
    #[sea_orm(iden = "content")]
    Content,
    #[sea_orm(iden = "development")]
    Development,
    #[sea_orm(iden = "streaming")]
    Streaming,
    #[sea_orm(iden = "workstation")]
    Workstation,
    #[sea_orm(iden = "budget")]
    Budget,
    #[sea_orm(iden = "mini")]
    Mini,
    #[sea_orm(iden = "student")]
    Student,
    #[sea_orm(iden = "custom")]
    Custom,
}
