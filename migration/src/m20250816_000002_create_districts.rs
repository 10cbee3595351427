use sea_orm_migration::{prelude::*, schema::*};

use super::m20250816_000001_create_regions::Region;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(pk_auto(District::Id))
                    .col(string_len(District::Name, 255).not_null().unique_key())
                    .col(integer(District::RegionId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_district_region")
                            .from(District::Table, District::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum District {
    Table,
    Id,
    Name,
    RegionId,
}
