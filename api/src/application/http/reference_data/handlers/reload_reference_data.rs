use axum::extract::State;
use nutrilens_core::domain::reference_data::{
    ports::ReferenceDataService, value_objects::ReferenceDataSummary,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/reference-data/reload",
    tag = "reference-data",
    summary = "Reload reference tables",
    description = "Reads both CSV tables again and swaps them in. The previous tables stay active if loading fails.",
    responses(
        (status = 200, body = ReferenceDataSummary),
        (status = 500, description = "Reference data could not be loaded", body = crate::application::http::server::api_entities::api_error::ApiErrorResponse)
    ),
)]
pub async fn reload_reference_data(
    State(state): State<AppState>,
) -> Result<Response<ReferenceDataSummary>, ApiError> {
    state
        .service
        .reload_reference_data()
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
