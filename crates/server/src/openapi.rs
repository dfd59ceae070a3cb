//! OpenAPI document. Schemas are documentation mirrors of the wire shapes.
use std::collections::BTreeMap;

use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    pub detail: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProblemDoc {
    pub status: u16,
    pub title: String,
    pub detail: Option<String>,
    /// Request path that produced the problem
    pub instance: Option<String>,
    /// Field name to messages, present on validation failures
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// One RFC 6902 operation: `add`, `remove`, `replace`, `move`, `copy` or `test`.
#[derive(ToSchema)]
pub struct PatchOperationDoc {
    pub op: String,
    #[schema(example = "/name")]
    pub path: String,
    pub from: Option<String>,
    pub value: Option<serde_json::Value>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub id: i32,
    pub name: String,
}

#[derive(ToSchema)]
pub struct UserInputDoc {
    /// Required, at most 100 characters, must not contain "admin"
    #[schema(example = "Jane Smith")]
    pub name: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceLocationDoc {
    pub id: i32,
    pub customer_id: i32,
    pub name: String,
    pub address: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ServiceLocationInputDoc {
    pub customer_id: i32,
    /// At most 255 characters
    pub name: String,
    /// At most 500 characters
    pub address: String,
}

#[derive(ToSchema)]
pub enum FeatureTypeDoc { Trees, Driveway, Edges, Beds, Acreage }

#[derive(ToSchema)]
pub enum MeasurementUnitDoc { Count, SquareFeet, LinearFeet, Acres }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LocationFeatureDoc {
    pub id: i32,
    pub location_id: i32,
    pub feature_type: FeatureTypeDoc,
    pub measurement: f32,
    pub unit: MeasurementUnitDoc,
    pub description: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LocationFeatureInputDoc {
    pub feature_type: FeatureTypeDoc,
    pub measurement: f32,
    pub unit: MeasurementUnitDoc,
    /// At most 500 characters
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list_customers,
        crate::routes::users::get_customer,
        crate::routes::users::create_customer,
        crate::routes::users::patch_customer,
        crate::routes::users::delete_customer,
        crate::routes::users::list_contractors,
        crate::routes::users::get_contractor,
        crate::routes::users::create_contractor,
        crate::routes::users::patch_contractor,
        crate::routes::users::delete_contractor,
        crate::routes::service_locations::list,
        crate::routes::service_locations::get,
        crate::routes::service_locations::create,
        crate::routes::service_locations::patch,
        crate::routes::service_locations::delete,
        crate::routes::location_features::list,
        crate::routes::location_features::get,
        crate::routes::location_features::create,
        crate::routes::location_features::patch,
        crate::routes::location_features::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProblemDoc,
            PatchOperationDoc,
            UserDoc,
            UserInputDoc,
            ServiceLocationDoc,
            ServiceLocationInputDoc,
            FeatureTypeDoc,
            MeasurementUnitDoc,
            LocationFeatureDoc,
            LocationFeatureInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "contractors"),
        (name = "service-locations"),
        (name = "location-features")
    )
)]
pub struct ApiDoc;
