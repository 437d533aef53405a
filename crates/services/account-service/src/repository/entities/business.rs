//! Business database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Business;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "business")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Business {
    fn from(model: Model) -> Self {
        Business {
            id: model.id,
            owner_id: model.owner_id,
            name: model.name,
            description: model.description,
            logo_url: model.logo_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
