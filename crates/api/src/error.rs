use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use fanout_dns_domain::DomainError;
use serde::Serialize;

/// Generic classes of error returned to API callers. `message` carries the
/// specifics.
pub const ERROR_CODE_BAD_REQUEST: &str = "BadRequest";
pub const ERROR_CODE_NOT_FOUND: &str = "NotFound";
pub const ERROR_CODE_INTERNAL: &str = "Internal";

/// An error returned when something goes wrong, either internally or with
/// the request given to the API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Generic description of the class of error encountered.
    pub code: &'static str,

    /// JSONPath-ish description of the request argument at fault, if one is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Human-readable description of the error encountered.
    pub message: String,
}

/// Wraps an ApiError into an `error` key within JSON responses.
#[derive(Debug, Serialize)]
struct ErrorWrapper {
    error: ApiError,
}

impl ApiError {
    pub fn bad_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE_BAD_REQUEST,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE_NOT_FOUND,
            field: None,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE_INTERNAL,
            field: None,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.code {
            ERROR_CODE_BAD_REQUEST => StatusCode::BAD_REQUEST,
            ERROR_CODE_NOT_FOUND => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidRecordType(_) => {
                ApiError::bad_request(".type", "Record type is not supported")
            }
            DomainError::InvalidDomainName(message) => ApiError::bad_request(".name", message),
            DomainError::QueryNotFound(_) => ApiError::not_found("Query not found by ID"),
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorWrapper { error: self })).into_response()
    }
}
