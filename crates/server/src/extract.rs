//! Extractors whose rejections render as problem documents.
use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::JsonApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);
