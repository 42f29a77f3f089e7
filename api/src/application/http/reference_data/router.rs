use super::handlers::reload_reference_data::{
    __path_reload_reference_data, reload_reference_data,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(reload_reference_data))]
pub struct ReferenceDataApiDoc;

pub fn reference_data_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/reference-data/reload", state.args.server.root_path),
        post(reload_reference_data),
    )
}
