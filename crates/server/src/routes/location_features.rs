//! Features nested under a service location. The location id in the URL is
//! the owner on create, and a feature reached through another location is not found.
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use json_patch::Patch;
use service::errors::ServiceError;
use service::location_feature::{LocationFeature, LocationFeatureInput};
use service::patch::apply_patch;
use service::validation::validate_entity;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/service-locations/{locationId}/features", tag = "location-features",
    params(("locationId" = i32, Path, description = "Service location ID")),
    responses((status = 200, description = "Features of the location", body = [crate::openapi::LocationFeatureDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiPath(location_id): ApiPath<i32>,
) -> Result<Json<Vec<LocationFeature>>, JsonApiError> {
    Ok(Json(state.location_features.get_by_location_id(location_id).await?))
}

#[utoipa::path(
    get, path = "/api/service-locations/{locationId}/features/{featureId}", tag = "location-features",
    params(
        ("locationId" = i32, Path, description = "Service location ID"),
        ("featureId" = i32, Path, description = "Feature ID")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::LocationFeatureDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath((location_id, feature_id)): ApiPath<(i32, i32)>,
) -> Result<Json<LocationFeature>, JsonApiError> {
    Ok(Json(state.location_features.get_in_location(location_id, feature_id).await?))
}

#[utoipa::path(
    post, path = "/api/service-locations/{locationId}/features", tag = "location-features",
    params(("locationId" = i32, Path, description = "Service location ID")),
    request_body = crate::openapi::LocationFeatureInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::LocationFeatureDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Service location not found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiPath(location_id): ApiPath<i32>,
    ApiJson(input): ApiJson<LocationFeatureInput>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<LocationFeature>), JsonApiError> {
    validate_entity(&input, &state.rules)?;
    if !state.service_locations.exists(location_id).await? {
        return Err(ServiceError::not_found("ServiceLocation", location_id).into());
    }
    let feature = state.location_features.create(input.into_record(location_id)?).await?;
    let href = format!("/api/service-locations/{}/features/{}", location_id, feature.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, href)], Json(feature)))
}

#[utoipa::path(
    patch, path = "/api/service-locations/{locationId}/features/{featureId}", tag = "location-features",
    params(
        ("locationId" = i32, Path, description = "Service location ID"),
        ("featureId" = i32, Path, description = "Feature ID")
    ),
    request_body = Vec<crate::openapi::PatchOperationDoc>,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid Patch", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    ApiPath((location_id, feature_id)): ApiPath<(i32, i32)>,
    ApiJson(doc): ApiJson<Patch>,
) -> Result<StatusCode, JsonApiError> {
    let current = state.location_features.get_in_location(location_id, feature_id).await?;
    let patched: LocationFeatureInput = apply_patch(&LocationFeatureInput::from(&current), &doc)?;
    validate_entity(&patched, &state.rules)?;
    state.location_features.update(feature_id, patched.into_record(location_id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/service-locations/{locationId}/features/{featureId}", tag = "location-features",
    params(
        ("locationId" = i32, Path, description = "Service location ID"),
        ("featureId" = i32, Path, description = "Feature ID")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath((location_id, feature_id)): ApiPath<(i32, i32)>,
) -> Result<StatusCode, JsonApiError> {
    state.location_features.get_in_location(location_id, feature_id).await?;
    state.location_features.delete(feature_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
