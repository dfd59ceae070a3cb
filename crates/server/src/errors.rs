//! Failure to HTTP translation.
//!
//! Every handler error becomes an RFC 7807 problem document. The response also
//! carries the `ProblemDetails` in its extensions so the problem-details
//! middleware can stamp the request path and log it in one place.
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use service::validation::{FieldErrors, ValidationFailure};
use thiserror::Error;
use tracing::error;

pub const PROBLEM_JSON: &str = "application/problem+json";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ProblemDetails {
    pub fn into_response_with(self, status: StatusCode) -> Response {
        let mut res = (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(&self)).into_response();
        res.extensions_mut().insert(self);
        res
    }
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub problem: ProblemDetails,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        let problem = ProblemDetails {
            status: status.as_u16(),
            title: title.into(),
            detail,
            instance: None,
            errors: None,
        };
        Self { status, problem }
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            Some("An unexpected error occurred.".into()),
        )
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        self.problem.into_response_with(self.status)
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(m) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(m)),
            ServiceError::BadArgument(m) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(m)),
            ServiceError::Unauthorized(m) => Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(m)),
            ServiceError::InvalidOperation(m) => Self::new(StatusCode::BAD_REQUEST, "Invalid Operation", Some(m)),
            ServiceError::NotImplemented(m) => Self::new(StatusCode::NOT_IMPLEMENTED, "Not Implemented", Some(m)),
            ServiceError::Timeout(m) => Self::new(StatusCode::REQUEST_TIMEOUT, "Request Timeout", Some(m)),
            ServiceError::Validation(failure) => failure.into(),
            other => {
                // the client only gets the generic message
                error!(err = %other, "unhandled service error");
                Self::internal()
            }
        }
    }
}

impl From<ValidationFailure> for JsonApiError {
    fn from(failure: ValidationFailure) -> Self {
        let status = match failure {
            ValidationFailure::Structural(_) => StatusCode::BAD_REQUEST,
            ValidationFailure::BusinessRule(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        let mut e = Self::new(status, failure.to_string(), None);
        e.problem.errors = Some(failure.errors().clone());
        e
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(r) => {
                Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type", Some(r.body_text()))
            }
            other => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(other.body_text())),
        }
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(rejection.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database setup failed: {0}")]
    Database(String),
}
