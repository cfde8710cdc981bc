use crate::error::HelpdeskError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

/// Error response returned by every handler
///
/// The body is always `{"message": ...}`; server-side failures also carry the
/// underlying error as `{"error": {"name", "message"}}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<Value>,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: None,
        }
    }

    /// Map a library error onto a response
    ///
    /// `context` is the route-specific message used for 500s.
    pub fn from_error(err: &HelpdeskError, context: &str) -> Self {
        match err {
            HelpdeskError::InvalidIdentifier { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "Invalid ticket id")
            },
            HelpdeskError::TicketNotFound { .. } => Self::not_found(),
            _ => {
                tracing::error!(error = %err, kind = err.name(), "{context}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: context.to_string(),
                    error: Some(json!({ "name": err.name(), "message": err.to_string() })),
                }
            },
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Ticket not found")
    }

    /// Body that the JSON extractor refused
    pub fn invalid_json(rejection: &JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

/// Unwrap a JSON request body
///
/// Bodies that are not JSON at all are rejected outright. A well-formed body
/// whose fields have the wrong type is handed back as a validation failure,
/// to be reported once the route has done its existence checks.
pub fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Result<T, HelpdeskError>, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(Ok(value)),
        Err(JsonRejection::JsonDataError(e)) => Ok(Err(HelpdeskError::Validation(e.body_text()))),
        Err(rejection) => Err(ApiError::invalid_json(&rejection)),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message,
            error: self.error,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = ApiError::from_error(
            &HelpdeskError::InvalidIdentifier { id: "abc".into() },
            "Server error",
        );
        assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
        assert!(invalid.error.is_none());

        let missing = ApiError::from_error(
            &HelpdeskError::TicketNotFound { id: "x".into() },
            "Server error",
        );
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.message, "Ticket not found");
    }

    #[test]
    fn test_validation_is_reported_as_server_error() {
        let err = ApiError::from_error(&HelpdeskError::required("priority"), "Error creating ticket");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Error creating ticket");

        let detail = err.error.unwrap();
        assert_eq!(detail["name"], "ValidationError");
        assert!(detail["message"].as_str().unwrap().contains("priority"));
    }

    #[test]
    fn test_json_body_passes_value_through() {
        let body = json_body(Ok(Json(7_u8))).unwrap().unwrap();
        assert_eq!(body, 7);
    }
}
