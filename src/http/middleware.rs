//! Middleware for the Pagemill API
//!
//! Provides request logging with duration tracking and shared-secret
//! authentication.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::time::Instant;
use tracing::{error, info};

use crate::core::services::Services;

/// Request logging middleware
///
/// Logs all incoming requests with method, URI, status code, and
/// duration. Successful requests are logged at INFO level, failed
/// requests at ERROR level.
///
/// # Arguments
///
/// * `request` - The incoming HTTP request
/// * `next` - The next middleware or handler in the chain
///
/// # Returns
///
/// The response from the next handler
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    // Process request
    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    // Log based on status
    if status.is_success() {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}

/// Shared-secret authentication middleware
///
/// When a secret is configured, every request must carry it in the
/// `x-shared-secret` header; mismatches and absences receive 401.
/// With no secret configured, requests pass through untouched.
pub async fn require_shared_secret(
    State(services): State<Arc<Services>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(expected) = services.config.server.shared_secret.as_deref() {
        let provided = request
            .headers()
            .get("x-shared-secret")
            .and_then(|value| value.to_str().ok());

        if provided != Some(expected) {
            let body = Json(json!({
                "error": "Unauthorized",
                "status": StatusCode::UNAUTHORIZED.as_u16(),
            }));
            return (StatusCode::UNAUTHORIZED, body).into_response();
        }
    }

    next.run(request).await
}
