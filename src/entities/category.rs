use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::utils::slug::slugify;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product::Relation::Category.def().rev()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Re-derive the slug from the name on every save, suffixing `-1` until
    /// no other category holds the candidate.
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
        Ok(self)
    }
}
