//! Request extractors.
//!
//! Both wrap axum's extractors so rejections render through [`AppError`]
//! instead of axum's plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor whose rejections render as [`AppError::BadRequest`].
///
/// Axum's own `Json` answers a body with missing or mistyped fields with a
/// plain-text 422; this keeps every client error in the `{"error": ...}`
/// shape with status 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor; an unparsable segment (`/api/ninjas/abc`) is a
/// 400 in the JSON error shape.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
