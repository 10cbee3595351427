use sea_orm_migration::{prelude::*, schema::*};

use super::m20250816_000003_create_users::User;
use super::m20250816_000005_create_products::Product;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlist::Table)
                    .if_not_exists()
                    .col(uuid(Wishlist::Id).primary_key())
                    .col(string_len(Wishlist::ProductSlug, 255).not_null())
                    .col(uuid(Wishlist::UserId).not_null())
                    .col(
                        timestamp_with_time_zone(Wishlist::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Wishlist::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_product")
                            .from(Wishlist::Table, Wishlist::ProductSlug)
                            .to(Product::Table, Product::Slug)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_user")
                            .from(Wishlist::Table, Wishlist::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wishlist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Wishlist {
    Table,
    Id,
    ProductSlug,
    UserId,
    CreatedAt,
    UpdatedAt,
}
