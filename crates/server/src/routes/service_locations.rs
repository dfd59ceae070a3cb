use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use json_patch::Patch;
use serde::Deserialize;
use service::patch::apply_patch;
use service::service_location::{ServiceLocation, ServiceLocationInput};
use service::validation::validate_entity;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Only locations owned by this customer
    pub customer_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/api/service-locations", tag = "service-locations",
    params(ListQuery),
    responses((status = 200, description = "Service locations", body = [crate::openapi::ServiceLocationDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<Vec<ServiceLocation>>, JsonApiError> {
    let locations = match q.customer_id {
        Some(customer_id) => state.service_locations.get_by_customer_id(customer_id).await?,
        None => state.service_locations.get_all().await?,
    };
    info!(count = locations.len(), customer_id = ?q.customer_id, "list service locations");
    Ok(Json(locations))
}

#[utoipa::path(
    get, path = "/api/service-locations/{id}", tag = "service-locations",
    params(("id" = i32, Path, description = "Service location ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceLocationDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<ServiceLocation>, JsonApiError> {
    Ok(Json(state.service_locations.get_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/service-locations", tag = "service-locations",
    request_body = crate::openapi::ServiceLocationInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceLocationDoc),
        (status = 400, description = "Validation Error or unknown customer", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ServiceLocationInput>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ServiceLocation>), JsonApiError> {
    validate_entity(&input, &state.rules)?;
    let location = state.service_locations.create(input.into_record()?).await?;
    let href = format!("/api/service-locations/{}", location.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, href)], Json(location)))
}

#[utoipa::path(
    patch, path = "/api/service-locations/{id}", tag = "service-locations",
    params(("id" = i32, Path, description = "Service location ID")),
    request_body = Vec<crate::openapi::PatchOperationDoc>,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid Patch", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(doc): ApiJson<Patch>,
) -> Result<StatusCode, JsonApiError> {
    let current = state.service_locations.get_by_id(id).await?;
    let patched: ServiceLocationInput = apply_patch(&ServiceLocationInput::from(&current), &doc)?;
    validate_entity(&patched, &state.rules)?;
    state.service_locations.update(id, patched.into_record()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/service-locations/{id}", tag = "service-locations",
    params(("id" = i32, Path, description = "Service location ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    state.service_locations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
