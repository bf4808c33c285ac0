use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::sink::FieldError;

/// The aggregated failure produced at the validation checkpoint, carrying
/// every recorded failure in insertion order.
#[derive(Debug, thiserror::Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

impl From<Vec<FieldError>> for ValidationFailure {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::new(errors)
    }
}

#[derive(Debug, Serialize)]
struct ValidationFailureBody {
    error: String,
    message: String,
    errors: Vec<FieldError>,
    code: u16,
    timestamp: String,
    correlation_id: String,
}

impl IntoResponse for ValidationFailure {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let message = if self.errors.len() == 1 {
            format!("Validation failed for field '{}'", self.errors[0].path)
        } else {
            format!("Validation failed for {} fields", self.errors.len())
        };

        let payload = ValidationFailureBody {
            error: "ValidationError".to_string(),
            message,
            errors: self.errors,
            code: StatusCode::BAD_REQUEST.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: correlation_id.clone(),
        };

        let mut response = (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}
