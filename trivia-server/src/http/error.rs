//! API error type and the JSON error envelope
//!
//! Every failure renders as `{"success": false, "error": <status>, "message": <text>}`
//! with one of four statuses: 400, 404, 405 or 422. The message text is fixed
//! per status; the specific cause goes to the log.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body (400)
    BadRequest { reason: String },

    /// Resource missing or empty result (404)
    NotFound { resource: &'static str, id: String },

    /// Known path, wrong method (405)
    MethodNotAllowed,

    /// Field validation failed (422)
    Validation(ValidationError),

    /// Well-formed body of the wrong shape (422)
    Unprocessable { reason: String },

    /// Store failure other than not-found (422, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) | Self::Unprocessable { .. } | Self::Store(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn message(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "Resource Not found",
            StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed",
            _ => "Unprocessable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::debug!("bad request: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => {}
            Self::Validation(e) => tracing::warn!(field = e.field(), "validation failed: {}", e),
            Self::Unprocessable { reason } => tracing::warn!("unprocessable body: {}", reason),
            Self::Store(e) => tracing::error!("store error: {}", e),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Store(e),
        }
    }
}

/// Router fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("route", "")
}

/// Replace axum's empty 405 body with the JSON envelope, keeping `Allow`.
pub async fn method_not_allowed_envelope(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut envelope = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        envelope.headers_mut().insert(header::ALLOW, allow);
    }
    envelope
}
