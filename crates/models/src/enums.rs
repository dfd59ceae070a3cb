//! Closed value sets shared by the entities.
//!
//! Every variant is stored in its column, and rendered in JSON, by its name.
use std::{fmt, str::FromStr};

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Subtype tag of a row in `users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum UserKind {
    #[sea_orm(string_value = "Customer")]
    Customer,
    #[sea_orm(string_value = "Contractor")]
    Contractor,
}

impl UserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserKind::Customer => "Customer",
            UserKind::Contractor => "Contractor",
        }
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(UserKind::Customer),
            "Contractor" => Ok(UserKind::Contractor),
            other => Err(ModelError::UnknownVariant { kind: "user kind", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum FeatureType {
    #[sea_orm(string_value = "Trees")]
    Trees,
    #[sea_orm(string_value = "Driveway")]
    Driveway,
    #[sea_orm(string_value = "Edges")]
    Edges,
    #[sea_orm(string_value = "Beds")]
    Beds,
    #[sea_orm(string_value = "Acreage")]
    Acreage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum MeasurementUnit {
    #[sea_orm(string_value = "Count")]
    Count,
    #[sea_orm(string_value = "SquareFeet")]
    SquareFeet,
    #[sea_orm(string_value = "LinearFeet")]
    LinearFeet,
    #[sea_orm(string_value = "Acres")]
    Acres,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum Category {
    #[sea_orm(string_value = "Lawn")]
    Lawn,
    #[sea_orm(string_value = "Tree")]
    Tree,
}

/// How often a line item recurs. `None` is a one-off job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum FrequencyType {
    #[sea_orm(string_value = "None")]
    None,
    #[sea_orm(string_value = "Daily")]
    Daily,
    #[sea_orm(string_value = "Weekly")]
    Weekly,
    #[sea_orm(string_value = "Monthly")]
    Monthly,
    #[sea_orm(string_value = "Seasonal")]
    Seasonal,
    #[sea_orm(string_value = "Yearly")]
    Yearly,
}
