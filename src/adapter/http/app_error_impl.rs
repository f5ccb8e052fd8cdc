use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut flattened = Vec::new();
    for (field, errors) in errors.field_errors() {
        for error in errors {
            flattened.push(FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            });
        }
    }
    flattened
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::ValidationError(errors) = &self {
            let body = Json(ValidationErrorResponse {
                errors: flatten_validation_errors(errors),
            });
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let status = match &self {
            AppError::InvalidId(_)
            | AppError::EmailTaken
            | AppError::ProfileNotFound
            | AppError::UserProfileNotFound
            | AppError::PostNotLiked
            | AppError::JsonRejection(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::NotAuthorized => StatusCode::UNAUTHORIZED,
            AppError::PostNotFound | AppError::CommentNotFound | AppError::GithubUserNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::ValidationError(_)
            | AppError::PasswordHashError
            | AppError::TokenError
            | AppError::DatabaseError(_)
            | AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Internal error: {}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
