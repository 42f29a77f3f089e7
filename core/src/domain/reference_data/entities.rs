use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Main,
    Additional,
}

impl IngredientCategory {
    /// Parses the `type` column. Blank labels mean `Main`; unknown labels
    /// yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "" | "main" => Some(IngredientCategory::Main),
            "additional" => Some(IngredientCategory::Additional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishIngredientEntry {
    pub name: String,
    pub quantity_grams: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DishIngredients {
    pub main: Vec<DishIngredientEntry>,
    pub additional: Vec<DishIngredientEntry>,
}

impl DishIngredients {
    pub fn entries(&self, category: IngredientCategory) -> &[DishIngredientEntry] {
        match category {
            IngredientCategory::Main => &self.main,
            IngredientCategory::Additional => &self.additional,
        }
    }

    pub fn push(&mut self, category: IngredientCategory, entry: DishIngredientEntry) {
        match category {
            IngredientCategory::Main => self.main.push(entry),
            IngredientCategory::Additional => self.additional.push(entry),
        }
    }
}

/// Macro values per 100 g of an ingredient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionRecord {
    pub const ZERO: NutritionRecord = NutritionRecord {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    /// Scales the per-100 g values to the given weight.
    pub fn scaled(&self, grams: f64) -> NutritionRecord {
        let factor = grams / 100.0;
        NutritionRecord {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(
            IngredientCategory::from_label("Main"),
            Some(IngredientCategory::Main)
        );
        assert_eq!(
            IngredientCategory::from_label("ADDITIONAL"),
            Some(IngredientCategory::Additional)
        );
        assert_eq!(
            IngredientCategory::from_label(""),
            Some(IngredientCategory::Main)
        );
        assert_eq!(IngredientCategory::from_label("garnish"), None);
    }

    #[test]
    fn test_scaled_record() {
        let record = NutritionRecord {
            calories: 130.0,
            protein: 2.7,
            carbs: 28.0,
            fat: 0.3,
        };
        let half = record.scaled(50.0);
        assert_eq!(half.calories, 65.0);
        assert_eq!(half.carbs, 14.0);
        assert_eq!(NutritionRecord::ZERO.scaled(250.0), NutritionRecord::ZERO);
    }
}
