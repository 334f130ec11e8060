use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use models::FieldViolation;
use service::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Error response rendered as `{"statusCode", "error", "message", "violations"}`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    error: &'static str,
    message: Option<String>,
    violations: Vec<FieldViolation>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, violations: Vec::new() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(message.into()))
    }

    pub fn with_violations(mut self, violations: Vec<FieldViolation>) -> Self {
        self.violations = violations;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        debug!(status = self.status.as_u16(), message = ?self.message, "request rejected");
        let mut body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "error": self.error,
        });
        if let Some(msg) = self.message {
            body["message"] = serde_json::json!(msg);
        }
        if !self.violations.is_empty() {
            body["violations"] = serde_json::json!(self.violations);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self {
        let violations = e.violations().clone();
        Self::bad_request(violations.to_string()).with_violations(violations.into_vec())
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::Model(e) => e.into(),
        }
    }
}

/// Malformed or ill-typed bodies are validation failures (400); header
/// problems such as a missing content type keep axum's status.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::bad_request(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => Self::bad_request(e.body_text()),
            other => {
                let status = other.status();
                let reason = status.canonical_reason().unwrap_or("Error");
                Self::new(status, reason, Some(other.body_text()))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
