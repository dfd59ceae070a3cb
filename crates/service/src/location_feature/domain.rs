use models::enums::{FeatureType, MeasurementUnit};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::finite;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFeature {
    pub id: i32,
    pub location_id: i32,
    pub feature_type: FeatureType,
    pub measurement: f32,
    pub unit: MeasurementUnit,
    pub description: Option<String>,
}

impl From<models::location_feature::Model> for LocationFeature {
    fn from(m: models::location_feature::Model) -> Self {
        Self {
            id: m.id,
            location_id: m.location_id,
            feature_type: m.feature_type,
            measurement: m.measurement,
            unit: m.unit,
            description: m.description,
        }
    }
}

/// Create body and patch target for a feature. The owning location comes from the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocationFeatureInput {
    #[validate(required(message = "Feature type is required"))]
    pub feature_type: Option<FeatureType>,
    #[validate(
        required(message = "Measurement is required"),
        custom(function = "finite", message = "Measurement must be a finite number")
    )]
    pub measurement: Option<f32>,
    #[validate(required(message = "Unit is required"))]
    pub unit: Option<MeasurementUnit>,
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
}

impl From<&LocationFeature> for LocationFeatureInput {
    fn from(f: &LocationFeature) -> Self {
        Self {
            feature_type: Some(f.feature_type),
            measurement: Some(f.measurement),
            unit: Some(f.unit),
            description: f.description.clone(),
        }
    }
}

impl LocationFeatureInput {
    /// Only call after validation has passed.
    pub fn into_record(self, location_id: i32) -> Result<NewLocationFeature, ServiceError> {
        let missing = |what: &str| ServiceError::BadArgument(format!("{} is required", what));
        Ok(NewLocationFeature {
            location_id,
            feature_type: self.feature_type.ok_or_else(|| missing("Feature type"))?,
            measurement: self.measurement.ok_or_else(|| missing("Measurement"))?,
            unit: self.unit.ok_or_else(|| missing("Unit"))?,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocationFeature {
    pub location_id: i32,
    pub feature_type: FeatureType,
    pub measurement: f32,
    pub unit: MeasurementUnit,
    pub description: Option<String>,
}
