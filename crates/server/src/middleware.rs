use std::any::Any;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::errors::{JsonApiError, ProblemDetails};

/// Stamp `instance` on every problem document with the request path and log the failure.
pub async fn problem_details(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let mut res = next.run(req).await;

    let Some(problem) = res.extensions_mut().remove::<ProblemDetails>() else {
        return res;
    };
    let status = res.status();
    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), title = %problem.title, "request failed");
    } else {
        warn!(%method, %path, status = status.as_u16(), title = %problem.title, detail = ?problem.detail, "request rejected");
    }
    ProblemDetails { instance: Some(path), ..problem }.into_response_with(status)
}

/// `CatchPanicLayer` handler: a panicking handler still answers with a 500 problem document.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = %message, "handler panicked");
    JsonApiError::internal().into_response()
}
