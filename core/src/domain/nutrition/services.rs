use tracing::instrument;

use crate::domain::{
    common::services::Service,
    meal::ports::FoodDetector,
    nutrition::{
        entities::NutritionReport, helpers::aggregate, ports::NutritionService,
        value_objects::IngredientPortion,
    },
    reference_data::ports::ReferenceSource,
    storage::ports::ImageStoragePort,
};

impl<RS, D, IS> NutritionService for Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    #[instrument(skip(self, portions), fields(ingredients = portions.len()))]
    fn calculate_nutrition(&self, portions: &[IngredientPortion]) -> NutritionReport {
        let reference_data = self.reference_data.snapshot();
        aggregate(portions, &reference_data.nutrition)
    }
}
