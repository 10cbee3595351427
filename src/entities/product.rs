use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::utils::slug::slugify;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub stream_price: f64,
    pub quantity: i32,
    pub category_slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategorySlug",
        to = "super::category::Column::Slug"
    )]
    Category,
    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        super::wishlist::Relation::Product.def().rev()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Same policy as categories: the slug tracks the name on every save,
    /// with `-1` suffixes resolving collisions. Updates also refresh
    /// `updated_at`.
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let name = match &self.name {
            ActiveValue::Set(name) | ActiveValue::Unchanged(name) => name.clone(),
            ActiveValue::NotSet => return Ok(self),
        };

        let mut slug = slugify(&name);
        loop {
            let mut query = Entity::find().filter(Column::Slug.eq(slug.as_str()));
            if !insert {
                if let ActiveValue::Set(id) | ActiveValue::Unchanged(id) = &self.id {
                    query = query.filter(Column::Id.ne(*id));
                }
            }
            if query.count(db).await? == 0 {
                break;
            }
            slug.push_str("-1");
        }

        self.slug = Set(slug);
        if !insert {
            self.updated_at = Set(Utc::now().into());
        }
        Ok(self)
    }
}
