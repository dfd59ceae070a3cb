use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{location_feature, user};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Customer, Features }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Customer => Entity::belongs_to(user::Entity).from(Column::CustomerId).to(user::Column::Id).into(),
            Relation::Features => Entity::has_many(location_feature::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Customer.def() }
}

impl Related<location_feature::Entity> for Entity {
    fn to() -> RelationDef { Relation::Features.def() }
}

impl ActiveModelBehavior for ActiveModel {}
