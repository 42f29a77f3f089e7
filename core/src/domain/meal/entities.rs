use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::value_objects::IngredientPortion;

/// A dish recognised in a meal image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub dish_name: String,
    pub confidence: f64,
}

impl Detection {
    pub fn new(dish_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            dish_name: dish_name.into(),
            confidence,
        }
    }
}

/// Ingredients resolved from a set of detections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealResolution {
    /// Highest-confidence detection, `None` when nothing was detected.
    pub primary: Option<Detection>,
    /// Distinct dish names, sorted and joined with ", ".
    pub all_dishes: String,
    pub main_ingredients: Vec<IngredientPortion>,
    /// Optional extras, always with zero grams for the user to fill in.
    pub additional_ingredients: Vec<IngredientPortion>,
}

/// Outcome of analysing an uploaded meal image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealAnalysis {
    pub dish: String,
    pub all_dishes: String,
    pub image_file: String,
    pub defaults: Vec<IngredientPortion>,
    pub additionals: Vec<IngredientPortion>,
    pub confidence: f64,
    pub suggestions: Vec<String>,
}
