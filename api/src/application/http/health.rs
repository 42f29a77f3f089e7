use axum::{Json, Router, extract::State, routing::get};
use nutrilens_core::domain::reference_data::ports::ReferenceDataService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub dishes: usize,
    pub nutrition_entries: usize,
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness check with reference table sizes",
    responses((status = 200, body = HealthResponse)),
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let summary = state.service.reference_data_summary();
    Json(HealthResponse {
        status: "ok".to_string(),
        dishes: summary.dishes,
        nutrition_entries: summary.nutrition_entries,
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
