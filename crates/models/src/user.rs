use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::UserKind;
use crate::service_location;

/// Customers and contractors share this table; `discriminator` selects the subtype.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub discriminator: UserKind,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ServiceLocations,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceLocations => Entity::has_many(service_location::Entity).into(),
        }
    }
}

impl Related<service_location::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceLocations.def() }
}

impl ActiveModelBehavior for ActiveModel {}
