//! Staff database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::StaffMember;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub email: String,
    /// Job title shown in the roster
    pub cargo: String,
    pub phone: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StaffMember {
    fn from(model: Model) -> Self {
        StaffMember {
            id: model.id,
            business_id: model.business_id,
            name: model.name,
            email: model.email,
            cargo: model.cargo,
            phone: model.phone,
            created_at: model.created_at,
        }
    }
}
