use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{category, product, product_image};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stream_price: Option<f64>,
    pub quantity: i32,
    pub category_slug: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stream_price: Option<f64>,
    pub quantity: Option<i32>,
    pub category_slug: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub image: Option<String>,
}

// ============ Categories ============

pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
    image: &str,
) -> AppResult<category::Model> {
    let new_category = category::ActiveModel {
        name: Set(name.to_string()),
        image: Set(image.to_string()),
        ..Default::default()
    };

    Ok(new_category.insert(db).await?)
}

pub async fn update_category(
    db: &DatabaseConnection,
    id: i32,
    payload: UpdateCategory,
) -> AppResult<category::Model> {
    let existing = category::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    let mut active: category::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }

    Ok(active.update(db).await?)
}

/// Products in the category go with it through the cascade on the slug
/// foreign key.
pub async fn delete_category(db: &DatabaseConnection, id: i32) -> AppResult<()> {
    let result = category::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Category not found".to_string()));
    }
    Ok(())
}

pub async fn list_categories(db: &DatabaseConnection) -> AppResult<Vec<category::Model>> {
    Ok(category::Entity::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?)
}

pub async fn find_category_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> AppResult<Option<category::Model>> {
    Ok(category::Entity::find()
        .filter(category::Column::Slug.eq(slug))
        .one(db)
        .await?)
}

// ============ Products ============

pub async fn create_product(
    db: &DatabaseConnection,
    payload: NewProduct,
) -> AppResult<product::Model> {
    find_category_by_slug(db, &payload.category_slug)
        .await?
        .ok_or_else(|| AppError::Validation("Unknown category slug".to_string()))?;

    let new_product = product::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        stream_price: match payload.stream_price {
            Some(price) => Set(price),
            None => NotSet,
        },
        quantity: Set(payload.quantity),
        category_slug: Set(payload.category_slug),
        ..Default::default()
    };

    Ok(new_product.insert(db).await?)
}

pub async fn update_product(
    db: &DatabaseConnection,
    id: Uuid,
    payload: UpdateProduct,
) -> AppResult<product::Model> {
    let existing = product::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    if let Some(category_slug) = payload.category_slug.as_deref() {
        find_category_by_slug(db, category_slug)
            .await?
            .ok_or_else(|| AppError::Validation("Unknown category slug".to_string()))?;
    }

    let mut active: product::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(stream_price) = payload.stream_price {
        active.stream_price = Set(stream_price);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(category_slug) = payload.category_slug {
        active.category_slug = Set(category_slug);
    }

    Ok(active.update(db).await?)
}

pub async fn delete_product(db: &DatabaseConnection, id: Uuid) -> AppResult<()> {
    let result = product::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product not found".to_string()));
    }
    Ok(())
}

pub async fn find_product_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> AppResult<Option<product::Model>> {
    Ok(product::Entity::find()
        .filter(product::Column::Slug.eq(slug))
        .one(db)
        .await?)
}

pub async fn list_products_by_category(
    db: &DatabaseConnection,
    category_slug: &str,
) -> AppResult<Vec<product::Model>> {
    Ok(product::Entity::find()
        .filter(product::Column::CategorySlug.eq(category_slug))
        .order_by_desc(product::Column::CreatedAt)
        .all(db)
        .await?)
}

// ============ Product images ============

pub async fn add_image(
    db: &DatabaseConnection,
    product_id: Uuid,
    image: &str,
) -> AppResult<product_image::Model> {
    product::Entity::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let new_image = product_image::ActiveModel {
        image: Set(image.to_string()),
        product_id: Set(product_id),
        ..Default::default()
    };

    Ok(new_image.insert(db).await?)
}

/// The product's first related image, or `None` when it has no images yet.
pub async fn first_image(
    db: &DatabaseConnection,
    product: &product::Model,
) -> AppResult<Option<product_image::Model>> {
    Ok(product
        .find_related(product_image::Entity)
        .order_by_asc(product_image::Column::Id)
        .one(db)
        .await?)
}
