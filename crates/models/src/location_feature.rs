use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{FeatureType, MeasurementUnit};
use crate::service_location;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_features")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub feature_type: FeatureType,
    pub measurement: f32,
    pub unit: MeasurementUnit,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Location }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Location => Entity::belongs_to(service_location::Entity)
                .from(Column::LocationId)
                .to(service_location::Column::Id)
                .into(),
        }
    }
}

impl Related<service_location::Entity> for Entity {
    fn to() -> RelationDef { Relation::Location.def() }
}

impl ActiveModelBehavior for ActiveModel {}
