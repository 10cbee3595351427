use market_backend::{
    config::Config,
    services::catalog::{self, NewProduct, UpdateCategory, UpdateProduct},
    AppError, AppResult,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

// Integration flow: slug derivation and collision handling, image accessors,
// and the category -> product delete cascade.
#[tokio::test]
async fn slug_assignment_and_cascade_flow() -> AppResult<()> {
    let db = match setup().await? {
        Some(db) => db,
        None => return Ok(()),
    };

    // Duplicate names resolve by appending "-1" each round
    let first = catalog::create_category(&db, "Electronics", "images/electronics.png").await?;
    let second = catalog::create_category(&db, "Electronics", "images/electronics.png").await?;
    let third = catalog::create_category(&db, "Electronics", "images/electronics.png").await?;
    assert_eq!(first.slug, "electronics");
    assert_eq!(second.slug, "electronics-1");
    assert_eq!(third.slug, "electronics-1-1");

    let phones = catalog::create_category(&db, "Phones", "images/phones.png").await?;
    assert_eq!(phones.slug, "phones");

    // Renaming a category re-derives its slug on save
    let outlets = catalog::create_category(&db, "Outlets", "images/outlets.png").await?;
    let renamed_category = catalog::update_category(
        &db,
        outlets.id,
        UpdateCategory {
            name: Some("Power Outlets".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(renamed_category.slug, "power-outlets");

    // A save that doesn't touch the name keeps the category slug stable
    let retouched_category = catalog::update_category(
        &db,
        outlets.id,
        UpdateCategory {
            image: Some("images/outlets-v2.png".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(retouched_category.slug, "power-outlets");

    // Products slug the same way, independently of categories
    let galaxy = catalog::create_product(
        &db,
        NewProduct {
            name: "Galaxy S24".to_string(),
            description: "Flagship phone".to_string(),
            price: 899.0,
            stream_price: None,
            quantity: 25,
            category_slug: phones.slug.clone(),
        },
    )
    .await?;
    assert_eq!(galaxy.slug, "galaxy-s24");
    assert_eq!(galaxy.stream_price, 1000.0);

    let galaxy_dup = catalog::create_product(
        &db,
        NewProduct {
            name: "Galaxy S24".to_string(),
            description: "Same name, different listing".to_string(),
            price: 879.0,
            stream_price: Some(950.0),
            quantity: 5,
            category_slug: phones.slug.clone(),
        },
    )
    .await?;
    assert_eq!(galaxy_dup.slug, "galaxy-s24-1");

    // Renaming re-derives the slug on save
    let renamed = catalog::update_product(
        &db,
        galaxy.id,
        UpdateProduct {
            name: Some("Galaxy S25".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(renamed.slug, "galaxy-s25");

    // Saving without a rename keeps the slug stable
    let restocked = catalog::update_product(
        &db,
        galaxy.id,
        UpdateProduct {
            quantity: Some(40),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(restocked.slug, "galaxy-s25");
    assert_eq!(restocked.quantity, 40);

    // First image is None until one is attached
    assert!(catalog::first_image(&db, &restocked).await?.is_none());
    let front = catalog::add_image(&db, galaxy.id, "products/galaxy-front.png").await?;
    catalog::add_image(&db, galaxy.id, "products/galaxy-back.png").await?;
    let got = catalog::first_image(&db, &restocked).await?;
    assert_eq!(got.map(|image| image.image), Some(front.image));

    // Unknown category slug is rejected before insert
    let bad = catalog::create_product(
        &db,
        NewProduct {
            name: "Orphan".to_string(),
            description: String::new(),
            price: 1.0,
            stream_price: None,
            quantity: 1,
            category_slug: "no-such-category".to_string(),
        },
    )
    .await;
    assert!(bad.is_err());

    // Direct product delete
    catalog::delete_product(&db, galaxy_dup.id).await?;
    assert!(catalog::find_product_by_slug(&db, "galaxy-s24-1").await?.is_none());

    // Deleting the category takes its products with it
    catalog::delete_category(&db, phones.id).await?;
    assert!(catalog::find_product_by_slug(&db, "galaxy-s25").await?.is_none());

    // Deletes against missing rows report NotFound
    assert!(matches!(
        catalog::delete_category(&db, phones.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog::delete_product(&db, galaxy.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

async fn setup() -> AppResult<Option<DatabaseConnection>> {
    // Allow skipping when no DB is configured in the environment.
    if std::env::var("TEST_DATABASE_URL").is_err() && std::env::var("DATABASE_URL").is_err() {
        eprintln!(
            "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
        );
        return Ok(None);
    }

    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| Config::from_env().database_url);
    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;

    // Clean tables between runs
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE wishlists, orders, product_images, products, categories, users, districts, regions RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(Some(db))
}
