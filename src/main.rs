use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_backend::{
    config::Config,
    db,
    services::users::{self, NewUser},
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "market_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Connect to database
    let db = db::connect(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Run migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations complete");

    // Seed superuser account if not exists
    seed_superuser(&db).await;
}

/// Seed the superuser account if it doesn't exist
async fn seed_superuser(db: &DatabaseConnection) {
    let admin_phone = "998901002030";

    let existing = users::find_by_phone(db, admin_phone)
        .await
        .expect("Failed to check for superuser");

    if existing.is_none() {
        let admin = users::create_superuser(db, admin_phone, "admin123", NewUser::default())
            .await
            .expect("Failed to create superuser");
        tracing::info!("Superuser account created: {}", admin.phone_number);
    }
}
