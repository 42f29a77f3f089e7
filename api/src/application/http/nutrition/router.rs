use super::handlers::calculate_nutrition::{__path_calculate_nutrition, calculate_nutrition};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(calculate_nutrition))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/calculate_nutrition", state.args.server.root_path),
        post(calculate_nutrition),
    )
}
