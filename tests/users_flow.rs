use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use market_backend::{
    config::Config,
    entities::{district, region, user},
    services::{
        catalog,
        catalog::NewProduct,
        orders::{self, PlaceOrder},
        users::{self, NewUser},
    },
    AppError, AppResult,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Set, Statement,
};
use sea_orm_migration::MigratorTrait;

// Integration flow: factory validation and hashing, superuser flags, and the
// delete cascades hanging off users and regions.
#[tokio::test]
async fn user_factory_and_cascade_flow() -> AppResult<()> {
    let db = match setup().await? {
        Some(db) => db,
        None => return Ok(()),
    };

    // Empty phone number is rejected
    let err = users::create_user(&db, "", "s3cret", NewUser::default()).await;
    assert!(matches!(err, Err(AppError::Validation(_))));

    // Region -> district so the user can point somewhere
    let tashkent = region::ActiveModel {
        name: Set("Tashkent".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    let chilonzor = district::ActiveModel {
        name: Set("Chilonzor".to_string()),
        region_id: Set(tashkent.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    // Stored password is hashed, never the plaintext
    let customer = users::create_user(
        &db,
        "998901234567",
        "s3cret",
        NewUser {
            first_name: Some("Aziz".to_string()),
            district_id: Some(chilonzor.id),
            ..Default::default()
        },
    )
    .await?;
    assert_ne!(customer.password_hash, "s3cret");
    let parsed = PasswordHash::new(&customer.password_hash)
        .expect("stored hash should parse");
    assert!(Argon2::default()
        .verify_password(b"s3cret", &parsed)
        .is_ok());
    assert_eq!(customer.role, user::UserRole::User);

    // Phone numbers are unique
    let dup = users::create_user(&db, "998901234567", "other", NewUser::default()).await;
    assert!(dup.is_err());

    // Superuser flags live on the returned model; the row keeps the defaults
    let boss = users::create_superuser(&db, "998909999999", "admin123", NewUser::default()).await?;
    assert!(boss.is_staff && boss.is_superuser);
    let stored = users::find_by_phone(&db, "998909999999")
        .await?
        .expect("superuser row should exist");
    assert!(!stored.is_staff && !stored.is_superuser);

    // Seed a product the customer can order and wish for
    let category = catalog::create_category(&db, "Books", "images/books.png").await?;
    let product = catalog::create_product(
        &db,
        NewProduct {
            name: "Atlas".to_string(),
            description: "World atlas".to_string(),
            price: 30.0,
            stream_price: None,
            quantity: 3,
            category_slug: category.slug.clone(),
        },
    )
    .await?;

    let order = orders::place_order(
        &db,
        PlaceOrder {
            product_id: product.id,
            user_id: customer.id,
            quantity: None,
            full_name: "Aziz Karimov".to_string(),
            phone_number: "998901234567".to_string(),
        },
    )
    .await?;
    assert_eq!(order.quantity, 1);

    orders::add_to_wishlist(&db, customer.id, &product.slug).await?;
    assert_eq!(orders::wishlist_slugs(&db, customer.id).await?, vec![product.slug.clone()]);

    // Removing works once, then the entry is gone
    orders::remove_from_wishlist(&db, customer.id, &product.slug).await?;
    assert!(orders::wishlist_slugs(&db, customer.id).await?.is_empty());
    assert!(matches!(
        orders::remove_from_wishlist(&db, customer.id, &product.slug).await,
        Err(AppError::NotFound(_))
    ));
    orders::add_to_wishlist(&db, customer.id, &product.slug).await?;

    // Deleting the user removes their orders and wishlist rows
    user::Entity::delete_by_id(customer.id).exec(&db).await?;
    assert!(orders::list_user_orders(&db, customer.id).await?.is_empty());
    assert!(orders::wishlist_slugs(&db, customer.id).await?.is_empty());

    // Deleting the region removes the district chain beneath it
    region::Entity::delete_by_id(tashkent.id).exec(&db).await?;
    assert!(district::Entity::find_by_id(chilonzor.id)
        .one(&db)
        .await?
        .is_none());

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
