use crate::application::http::{
    health::HealthApiDoc, meal::router::MealApiDoc, nutrition::router::NutritionApiDoc,
    reference_data::router::ReferenceDataApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "NutriLens API",
    description = "Detects dishes in meal photos and estimates their nutrition"
))]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MealApiDoc::openapi());
    openapi.merge(NutritionApiDoc::openapi());
    openapi.merge(ReferenceDataApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
