pub use sea_orm_migration::prelude::*;

mod m20250816_000001_create_regions;
mod m20250816_000002_create_districts;
mod m20250816_000003_create_users;
mod m20250816_000004_create_categories;
mod m20250816_000005_create_products;
mod m20250816_000006_create_product_images;
mod m20250816_000007_create_orders;
mod m20250816_000008_create_wishlists;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250816_000001_create_regions::Migration),
            Box::new(m20250816_000002_create_districts::Migration),
            Box::new(m20250816_000003_create_users::Migration),
            Box::new(m20250816_000004_create_categories::Migration),
            Box::new(m20250816_000005_create_products::Migration),
            Box::new(m20250816_000006_create_product_images::Migration),
            Box::new(m20250816_000007_create_orders::Migration),
            Box::new(m20250816_000008_create_wishlists::Migration),
        ]
    }
}
