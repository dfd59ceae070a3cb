pub mod location_features;
pub mod service_locations;
pub mod users;

use axum::{extract::State, http::StatusCode, middleware, routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Service and database reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            warn!(err = %e, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::degraded(e.to_string())))
        }
    }
}

async fn no_route() -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some("No resource matches this path.".into()))
}

/// Build the full application router: health, REST API and API docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/customers", get(users::list_customers).post(users::create_customer))
        .route(
            "/api/customers/:id",
            get(users::get_customer).patch(users::patch_customer).delete(users::delete_customer),
        )
        .route("/api/contractors", get(users::list_contractors).post(users::create_contractor))
        .route(
            "/api/contractors/:id",
            get(users::get_contractor).patch(users::patch_contractor).delete(users::delete_contractor),
        )
        .route("/api/service-locations", get(service_locations::list).post(service_locations::create))
        .route(
            "/api/service-locations/:id",
            get(service_locations::get).patch(service_locations::patch).delete(service_locations::delete),
        )
        .route(
            "/api/service-locations/:location_id/features",
            get(location_features::list).post(location_features::create),
        )
        .route(
            "/api/service-locations/:location_id/features/:feature_id",
            get(location_features::get).patch(location_features::patch).delete(location_features::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(no_route)
        .with_state(state)
        .layer(CatchPanicLayer::custom(crate::middleware::handle_panic))
        .layer(middleware::from_fn(crate::middleware::problem_details))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
