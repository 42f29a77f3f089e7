use crate::domain::nutrition::{
    entities::{MacroTotals, NutritionReport},
    policies::meal_suggestions,
    ports::NutritionLookup,
    value_objects::IngredientPortion,
};

const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
const CARBS_KCAL_PER_GRAM: f64 = 4.0;
const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sums the scaled macros of every portion and attaches advisory messages.
///
/// A portion whose scaled calories are zero or negative gets its calories
/// estimated from protein, carbs and fat with the Atwater factors.
pub fn aggregate<L>(portions: &[IngredientPortion], lookup: &L) -> NutritionReport
where
    L: NutritionLookup + ?Sized,
{
    let mut raw = MacroTotals::default();
    let mut total_grams = 0.0;

    for portion in portions {
        total_grams += portion.grams;

        let scaled = lookup
            .resolve(&portion.name.to_lowercase())
            .scaled(portion.grams);

        let calories = if scaled.calories <= 0.0 {
            scaled.protein * PROTEIN_KCAL_PER_GRAM
                + scaled.carbs * CARBS_KCAL_PER_GRAM
                + scaled.fat * FAT_KCAL_PER_GRAM
        } else {
            scaled.calories
        };

        raw.calories += calories;
        raw.protein += scaled.protein;
        raw.carbs += scaled.carbs;
        raw.fat += scaled.fat;
    }

    let totals = MacroTotals {
        calories: round_one_decimal(raw.calories),
        protein: round_one_decimal(raw.protein),
        carbs: round_one_decimal(raw.carbs),
        fat: round_one_decimal(raw.fat),
    };

    tracing::debug!(?totals, total_grams, "Nutritional totals computed");

    NutritionReport {
        suggestions: meal_suggestions(&totals, total_grams),
        totals,
    }
}
