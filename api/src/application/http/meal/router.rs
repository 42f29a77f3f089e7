use super::handlers::{
    get_upload::{__path_get_upload, get_upload},
    upload_meal::{__path_upload_meal, upload_meal},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Largest accepted meal photo.
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(OpenApi)]
#[openapi(paths(upload_meal, get_upload))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/upload_meal", state.args.server.root_path),
            post(upload_meal),
        )
        .route(
            &format!("{}/uploads/{{filename}}", state.args.server.root_path),
            get(get_upload),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE))
}
