use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    reference_data::value_objects::{DishIngredientRow, NutritionRow, ReferenceDataSummary},
};

/// Tabular source of the two reference tables, read synchronously.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceSource: Send + Sync + 'static {
    fn dish_ingredient_rows(&self) -> Result<Vec<DishIngredientRow>, CoreError>;

    fn nutrition_rows(&self) -> Result<Vec<NutritionRow>, CoreError>;
}

pub trait ReferenceDataService: Send + Sync {
    fn reference_data_summary(&self) -> ReferenceDataSummary;

    /// Rebuilds both tables from the source and publishes them atomically.
    /// The current tables stay active when loading fails.
    fn reload_reference_data(
        &self,
    ) -> impl Future<Output = Result<ReferenceDataSummary, CoreError>> + Send;
}
