use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Problem-style JSON error body: `{"title", "status", "detail"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "title": self.title,
            "status": self.status.as_u16(),
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Validation(errors) => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(errors.to_string()))
            }
            ServiceError::Conflict(msg) => {
                error!(err = %msg, "unresolved concurrency conflict");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Concurrency Conflict", Some(msg))
            }
            ServiceError::Unavailable(msg) => JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while processing your request.",
                Some(msg),
            ),
            ServiceError::Db(msg) => {
                error!(err = %msg, "database error");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", Some(msg))
            }
        }
    }
}
