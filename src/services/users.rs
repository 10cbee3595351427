use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::user;
use crate::error::{AppError, AppResult};

/// Optional fields applied on top of the required phone number and password.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: user::UserRole,
    pub district_id: Option<i32>,
}

/// Create a user keyed by phone number, hashing the password before the row
/// is written.
pub async fn create_user(
    db: &DatabaseConnection,
    phone_number: &str,
    password: &str,
    extra: NewUser,
) -> AppResult<user::Model> {
    if phone_number.is_empty() {
        return Err(AppError::Validation(
            "The phone number field must be set".to_string(),
        ));
    }

    let password_hash = hash_password(password)?;

    let new_user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        phone_number: Set(phone_number.to_string()),
        password_hash: Set(password_hash),
        first_name: Set(extra.first_name),
        last_name: Set(extra.last_name),
        role: Set(extra.role),
        district_id: Set(extra.district_id),
        is_staff: Set(false),
        is_superuser: Set(false),
        is_active: Set(true),
        ..Default::default()
    };

    Ok(new_user.insert(db).await?)
}

/// Create a user and mark it with the elevated flags. The flags are set on
/// the returned model only; the stored row keeps the defaults until a caller
/// saves it again.
pub async fn create_superuser(
    db: &DatabaseConnection,
    phone_number: &str,
    password: &str,
    extra: NewUser,
) -> AppResult<user::Model> {
    let mut user = create_user(db, phone_number, password, extra).await?;
    user.is_staff = true;
    user.is_superuser = true;
    Ok(user)
}

pub async fn find_by_phone(
    db: &DatabaseConnection,
    phone_number: &str,
) -> AppResult<Option<user::Model>> {
    Ok(user::Entity::find()
        .filter(user::Column::PhoneNumber.eq(phone_number))
        .one(db)
        .await?)
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string())
}
