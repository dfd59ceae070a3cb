use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::{line_item, service_feature_factor};

/// A priced service offering. Pricing itself is not computed anywhere.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: Category,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { FeatureFactors, LineItems }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::FeatureFactors => Entity::has_many(service_feature_factor::Entity).into(),
            Relation::LineItems => Entity::has_many(line_item::Entity).into(),
        }
    }
}

impl Related<service_feature_factor::Entity> for Entity {
    fn to() -> RelationDef { Relation::FeatureFactors.def() }
}

impl Related<line_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::LineItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}
