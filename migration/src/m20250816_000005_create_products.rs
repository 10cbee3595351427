use sea_orm_migration::{prelude::*, schema::*};

use super::m20250816_000004_create_categories::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len(Product::Name, 255).not_null())
                    .col(string_len(Product::Slug, 255).not_null().unique_key())
                    .col(text(Product::Description).not_null())
                    .col(double(Product::Price).not_null())
                    .col(double(Product::StreamPrice).not_null().default(1000.0))
                    .col(integer(Product::Quantity).not_null())
                    .col(string_len(Product::CategorySlug, 255).not_null())
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_category")
                            .from(Product::Table, Product::CategorySlug)
                            .to(Category::Table, Category::Slug)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Price,
    StreamPrice,
    Quantity,
    CategorySlug,
    CreatedAt,
    UpdatedAt,
}
