use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message, field) = match &self {
            ProductError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                error.to_string(),
                Some(error.field().to_string()),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "product.not_found".to_string(),
                None,
            ),
            // store details stay in the logs
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "internal.failure".to_string(),
                None,
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
                field,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::product::errors::ValidationError;

    #[test]
    fn should_map_validation_error_to_bad_request_with_field() {
        let (status, json) =
            ProductError::Validation(ValidationError::PriceNegative).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "product.price_negative");
        assert_eq!(json.0.field.as_deref(), Some("price"));
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
        assert_eq!(json.0.message, "product.not_found");
        assert!(json.0.field.is_none());
    }

    #[test]
    fn should_hide_store_details_behind_opaque_500() {
        for error in [RepositoryError::DatabaseError, RepositoryError::Persistence] {
            let (status, json) = ProductError::Repository(error).into_error_response();

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(json.0.name, "InternalError");
            assert_eq!(json.0.message, "internal.failure");
            assert!(json.0.field.is_none());
        }
    }
}
