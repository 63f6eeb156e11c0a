use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Error kind (`ValidationError`, `NotFound`, `InternalError`)
    pub name: String,
    /// Code-style message identifier
    pub message: String,
    /// Offending payload field, for validation errors
    #[oai(skip_serializing_if_is_none)]
    pub field: Option<String>,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Request bodies rejected before they reach a handler.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Body is not a JSON object (non-object JSON or truncated input).
    #[error("request.malformed_body")]
    MalformedBody,
    /// Missing or non-JSON `Content-Type`.
    #[error("request.unsupported_content_type")]
    UnsupportedContentType,
}

impl IntoErrorResponse for RequestError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: self.to_string(),
                field: None,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_rejected_bodies_to_bad_request_without_field() {
        for (error, message) in [
            (RequestError::MalformedBody, "request.malformed_body"),
            (
                RequestError::UnsupportedContentType,
                "request.unsupported_content_type",
            ),
        ] {
            let (status, json) = error.into_error_response();

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json.0.name, "ValidationError");
            assert_eq!(json.0.message, message);
            assert!(json.0.field.is_none());
        }
    }
}
