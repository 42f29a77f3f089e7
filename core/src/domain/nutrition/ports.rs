use crate::domain::{
    nutrition::{entities::NutritionReport, value_objects::IngredientPortion},
    reference_data::entities::NutritionRecord,
};

/// Resolves free-text ingredient names to per-100 g nutrition values.
/// Misses resolve to [`NutritionRecord::ZERO`].
#[cfg_attr(test, mockall::automock)]
pub trait NutritionLookup {
    fn resolve(&self, name: &str) -> NutritionRecord;
}

pub trait NutritionService: Send + Sync {
    fn calculate_nutrition(&self, portions: &[IngredientPortion]) -> NutritionReport;
}
