use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::FrequencyType;
use crate::line_item;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "frequencies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "type")]
    pub frequency_type: FrequencyType,
    pub value: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { LineItems }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::LineItems => Entity::has_many(line_item::Entity).into(),
        }
    }
}

impl Related<line_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::LineItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}
