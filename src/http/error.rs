//! HTTP status mapping for core errors.
//!
//! Keeps the axum dependency out of core/: the core classifies its
//! errors, this module translates the classification into status
//! codes and JSON error bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::PagemillError;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &PagemillError) -> StatusCode {
    if err.is_bad_request() {
        StatusCode::BAD_REQUEST
    } else if err.is_unprocessable() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for PagemillError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let message = self.message();

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
