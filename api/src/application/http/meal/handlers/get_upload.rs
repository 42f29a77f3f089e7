use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use nutrilens_core::domain::meal::ports::MealService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    tag = "meal",
    summary = "Download an uploaded meal photo",
    params(
        ("filename" = String, Path, description = "Stored file name as returned in image_url"),
    ),
    responses(
        (status = 200, description = "Image bytes", body = Vec<u8>, content_type = "image/*"),
        (status = 404, description = "Unknown file")
    ),
)]
pub async fn get_upload(
    Path(filename): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let image = state
        .service
        .read_upload(filename)
        .await
        .map_err(ApiError::from)?;

    Ok(([(CONTENT_TYPE, image.content_type)], image.data).into_response())
}
