use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ingredient name with a weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientPortion {
    pub name: String,
    pub grams: f64,
}

impl IngredientPortion {
    pub fn new(name: impl Into<String>, grams: f64) -> Self {
        Self {
            name: name.into(),
            grams,
        }
    }
}
