use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("No food detected")]
    NoFoodDetected { image_url: String },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::NoFoodDetected { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            error: self.to_string(),
            image_url: match self {
                ApiError::NoFoodDetected { image_url } => Some(image_url),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::UnsupportedImageType => {
                ApiError::BadRequest("Unsupported image type".to_string())
            }
            CoreError::NoFoodDetected { .. } => ApiError::BadRequest("No food detected".to_string()),
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            CoreError::ReferenceLoad(_) => {
                ApiError::InternalServerError("Failed to load reference data".to_string())
            }
            CoreError::StorageError(_) | CoreError::ExternalServiceError(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
