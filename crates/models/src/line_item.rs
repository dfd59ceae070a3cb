use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{estimate, frequency, service_type};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "line_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cost: f32,
    pub name: String,
    pub estimate_id: i32,
    pub service_type_id: i32,
    pub frequency_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Estimate, ServiceType, Frequency }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Estimate => Entity::belongs_to(estimate::Entity).from(Column::EstimateId).to(estimate::Column::Id).into(),
            Relation::ServiceType => Entity::belongs_to(service_type::Entity).from(Column::ServiceTypeId).to(service_type::Column::Id).into(),
            Relation::Frequency => Entity::belongs_to(frequency::Entity).from(Column::FrequencyId).to(frequency::Column::Id).into(),
        }
    }
}

impl Related<estimate::Entity> for Entity {
    fn to() -> RelationDef { Relation::Estimate.def() }
}

impl Related<service_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceType.def() }
}

impl Related<frequency::Entity> for Entity {
    fn to() -> RelationDef { Relation::Frequency.def() }
}

impl ActiveModelBehavior for ActiveModel {}
