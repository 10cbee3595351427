use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{order, product, user, wishlist};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub product_id: Uuid,
    pub user_id: Uuid,
    /// Defaults to 1 when not given.
    pub quantity: Option<i32>,
    pub full_name: String,
    pub phone_number: String,
}

pub async fn place_order(db: &DatabaseConnection, payload: PlaceOrder) -> AppResult<order::Model> {
    product::Entity::find_by_id(payload.product_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    user::Entity::find_by_id(payload.user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let new_order = order::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        user_id: Set(payload.user_id),
        quantity: match payload.quantity {
            Some(quantity) => Set(quantity),
            None => NotSet,
        },
        full_name: Set(payload.full_name),
        phone_number: Set(payload.phone_number),
        ..Default::default()
    };

    Ok(new_order.insert(db).await?)
}

pub async fn list_user_orders(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> AppResult<Vec<order::Model>> {
    Ok(order::Entity::find()
        .filter(order::Column::UserId.eq(user_id))
        .order_by_desc(order::Column::CreatedAt)
        .all(db)
        .await?)
}

// ============ Wishlist ============

pub async fn add_to_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
    product_slug: &str,
) -> AppResult<wishlist::Model> {
    product::Entity::find()
        .filter(product::Column::Slug.eq(product_slug))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let entry = wishlist::ActiveModel {
        id: Set(Uuid::new_v4()),
        product_slug: Set(product_slug.to_string()),
        user_id: Set(user_id),
        ..Default::default()
    };

    Ok(entry.insert(db).await?)
}

pub async fn remove_from_wishlist(
    db: &DatabaseConnection,
    user_id: Uuid,
    product_slug: &str,
) -> AppResult<()> {
    let result = wishlist::Entity::delete_many()
        .filter(wishlist::Column::UserId.eq(user_id))
        .filter(wishlist::Column::ProductSlug.eq(product_slug))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Wishlist entry not found".to_string()));
    }
    Ok(())
}

/// Slugs of every product on the user's wishlist, the product identifiers
/// the wishlist table actually stores.
pub async fn wishlist_slugs(db: &DatabaseConnection, user_id: Uuid) -> AppResult<Vec<String>> {
    Ok(wishlist::Entity::find()
        .filter(wishlist::Column::UserId.eq(user_id))
        .select_only()
        .column(wishlist::Column::ProductSlug)
        .into_tuple()
        .all(db)
        .await?)
}
