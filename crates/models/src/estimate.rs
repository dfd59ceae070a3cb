use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{line_item, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "estimates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub total: f32,
    pub customer_id: i32,
    pub contractor_id: i32,
    pub created_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer, Contractor, LineItems }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::Contractor => Entity::belongs_to(user::Entity).from(Column::ContractorId).to(user::Column::Id).into(),
            Relation::LineItems => Entity::has_many(line_item::Entity).into(),
        }
    }
}

impl Related<line_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::LineItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}
