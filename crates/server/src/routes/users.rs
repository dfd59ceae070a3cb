//! Customer and contractor endpoints. Both kinds share one implementation;
//! the thin per-route wrappers only bind the kind and document the path.
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use json_patch::Patch;
use models::enums::UserKind;
use service::patch::apply_patch;
use service::user::{User, UserInput};
use service::validation::validate_entity;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

type Created = (StatusCode, [(header::HeaderName, String); 1], Json<User>);

fn base_path(kind: UserKind) -> &'static str {
    match kind {
        UserKind::Customer => "/api/customers",
        UserKind::Contractor => "/api/contractors",
    }
}

async fn list(state: &AppState, kind: UserKind) -> Result<Json<Vec<User>>, JsonApiError> {
    Ok(Json(state.users(kind).get_all().await?))
}

async fn get(state: &AppState, kind: UserKind, id: i32) -> Result<Json<User>, JsonApiError> {
    Ok(Json(state.users(kind).get_by_id(id).await?))
}

async fn create(state: &AppState, kind: UserKind, input: UserInput) -> Result<Created, JsonApiError> {
    validate_entity(&input, &state.rules)?;
    let user = state.users(kind).create(input.into_record()?).await?;
    let location = format!("{}/{}", base_path(kind), user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

async fn patch(state: &AppState, kind: UserKind, id: i32, patch: Patch) -> Result<StatusCode, JsonApiError> {
    let users = state.users(kind);
    let current = users.get_by_id(id).await?;
    let patched: UserInput = apply_patch(&UserInput::from(&current), &patch)?;
    validate_entity(&patched, &state.rules)?;
    users.update(id, patched.into_record()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete(state: &AppState, kind: UserKind, id: i32) -> Result<StatusCode, JsonApiError> {
    state.users(kind).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses((status = 200, description = "All customers", body = [crate::openapi::UserDoc]))
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<User>>, JsonApiError> {
    list(&state, UserKind::Customer).await
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get_customer(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<User>, JsonApiError> {
    get(&state, UserKind::Customer, id).await
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 422, description = "Business Rule Violation", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserInput>,
) -> Result<Created, JsonApiError> {
    create(&state, UserKind::Customer, input).await
}

#[utoipa::path(
    patch, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = Vec<crate::openapi::PatchOperationDoc>,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid Patch", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc),
        (status = 422, description = "Business Rule Violation", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn patch_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(doc): ApiJson<Patch>,
) -> Result<StatusCode, JsonApiError> {
    patch(&state, UserKind::Customer, id, doc).await
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete_customer(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    delete(&state, UserKind::Customer, id).await
}

#[utoipa::path(
    get, path = "/api/contractors", tag = "contractors",
    responses((status = 200, description = "All contractors", body = [crate::openapi::UserDoc]))
)]
pub async fn list_contractors(State(state): State<AppState>) -> Result<Json<Vec<User>>, JsonApiError> {
    list(&state, UserKind::Contractor).await
}

#[utoipa::path(
    get, path = "/api/contractors/{id}", tag = "contractors",
    params(("id" = i32, Path, description = "Contractor ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get_contractor(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<User>, JsonApiError> {
    get(&state, UserKind::Contractor, id).await
}

#[utoipa::path(
    post, path = "/api/contractors", tag = "contractors",
    request_body = crate::openapi::UserInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 422, description = "Business Rule Violation", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create_contractor(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UserInput>,
) -> Result<Created, JsonApiError> {
    create(&state, UserKind::Contractor, input).await
}

#[utoipa::path(
    patch, path = "/api/contractors/{id}", tag = "contractors",
    params(("id" = i32, Path, description = "Contractor ID")),
    request_body = Vec<crate::openapi::PatchOperationDoc>,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid Patch", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc),
        (status = 422, description = "Business Rule Violation", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn patch_contractor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(doc): ApiJson<Patch>,
) -> Result<StatusCode, JsonApiError> {
    patch(&state, UserKind::Contractor, id, doc).await
}

#[utoipa::path(
    delete, path = "/api/contractors/{id}", tag = "contractors",
    params(("id" = i32, Path, description = "Contractor ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete_contractor(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    delete(&state, UserKind::Contractor, id).await
}
