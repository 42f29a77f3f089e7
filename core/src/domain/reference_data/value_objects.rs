use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the dish-ingredient table. All columns are kept as text and
/// parsed leniently when the catalog is built; absent cells are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishIngredientRow {
    pub food_name: String,
    pub ingredient_name: String,
    pub ingredient_type: String,
    pub std_quantity: String,
    pub std_unit: String,
}

/// One row of the nutrition table, values per 100 g.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionRow {
    pub description: String,
    pub calorie_value: String,
    pub protein_value: String,
    pub carbohydrate_value: String,
    pub fat: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceDataSummary {
    pub dishes: usize,
    pub nutrition_entries: usize,
}
