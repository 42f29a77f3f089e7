use axum::extract::State;
use bytes::Bytes;
use nutrilens_core::domain::nutrition::{entities::NutritionReport, ports::NutritionService};
use tracing::error;

use crate::application::http::{
    nutrition::validators::CalculateNutritionRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/calculate_nutrition",
    tag = "nutrition",
    summary = "Calculate meal nutrition",
    description = "Sums calories and macronutrients for the given ingredient weights and returns advisory messages.",
    request_body = CalculateNutritionRequest,
    responses(
        (status = 200, body = NutritionReport),
        (status = 500, description = "Malformed request body", body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
)]
pub async fn calculate_nutrition(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response<NutritionReport>, ApiError> {
    let request: CalculateNutritionRequest = serde_json::from_slice(&body).map_err(|e| {
        error!("Failed to parse nutrition request: {}", e);
        ApiError::InternalServerError("Failed to calculate nutrition".to_string())
    })?;

    let report = state
        .service
        .calculate_nutrition(&request.into_portions());

    Ok(Response::OK(report))
}
