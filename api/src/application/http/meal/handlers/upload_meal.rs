use axum::extract::{Multipart, State};
use bytes::Bytes;
use nutrilens_core::domain::{
    common::entities::app_errors::CoreError,
    meal::{entities::MealAnalysis, ports::MealService, value_objects::UploadMealInput},
    nutrition::value_objects::IngredientPortion,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const IMAGE_FIELD: &str = "mealImage";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadMealResponse {
    /// Dish detected with the highest confidence.
    pub dish: String,
    pub all_dishes: String,
    pub image_url: String,
    pub defaults: Vec<IngredientPortion>,
    pub additionals: Vec<IngredientPortion>,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}

impl UploadMealResponse {
    fn new(analysis: MealAnalysis, image_url: String) -> Self {
        Self {
            dish: analysis.dish,
            all_dishes: analysis.all_dishes,
            image_url,
            defaults: analysis.defaults,
            additionals: analysis.additionals,
            confidence: analysis.confidence,
            suggestions: analysis.suggestions,
        }
    }
}

#[utoipa::path(
    post,
    path = "/upload_meal",
    tag = "meal",
    summary = "Analyze a meal photo",
    description = "Stores the uploaded photo, detects the dishes on it and returns their reference ingredients. The image is sent as the `mealImage` multipart field.",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = UploadMealResponse),
        (status = 400, description = "Missing or unsupported image, or no food detected", body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
)]
pub async fn upload_meal(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<UploadMealResponse>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        // Only the first image part is used.
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| ApiError::BadRequest("No image uploaded".to_string()))?;

    let analysis = state
        .service
        .analyze_meal(UploadMealInput { file_name, data })
        .await
        .map_err(|e| match e {
            CoreError::NoFoodDetected { image_file } => ApiError::NoFoodDetected {
                image_url: state.upload_url(&image_file),
            },
            other => ApiError::from(other),
        })?;

    let image_url = state.upload_url(&analysis.image_file);
    Ok(Response::OK(UploadMealResponse::new(analysis, image_url)))
}
