use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::service_type;

/// Per-feature multiplier for a service type. Stored only; nothing reads it for pricing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_feature_factors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_type_id: i32,
    pub feature_type: String,
    pub multiplier: f32,
    pub calculation_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ServiceType }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceType => Entity::belongs_to(service_type::Entity)
                .from(Column::ServiceTypeId)
                .to(service_type::Column::Id)
                .into(),
        }
    }
}

impl Related<service_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceType.def() }
}

impl ActiveModelBehavior for ActiveModel {}
