//! Advisory rules applied to meal totals. Thresholds are fixed dietary
//! policy and are not configurable.

use crate::domain::nutrition::entities::MacroTotals;

pub const LARGE_PORTION_GRAMS: f64 = 1000.0;
pub const HIGH_CALORIES: f64 = 800.0;
pub const LOW_CALORIES: f64 = 300.0;
pub const LOW_PROTEIN: f64 = 15.0;
pub const HIGH_PROTEIN: f64 = 70.0;
pub const HIGH_CARBS: f64 = 150.0;
pub const LOW_CARBS: f64 = 20.0;
pub const HIGH_FAT: f64 = 50.0;
pub const LOW_FAT: f64 = 10.0;

pub const LARGE_PORTION_WARNING: &str = "Warning: Extremely large portion size.";
pub const HIGH_CALORIE_ADVICE: &str = "High calorie meal. Consider portion control.";
pub const LOW_CALORIE_ADVICE: &str = "Low calorie meal. Ensure sufficient energy intake.";
pub const LOW_PROTEIN_ADVICE: &str = "Low protein content. Add protein rich foods.";
pub const HIGH_PROTEIN_ADVICE: &str = "High protein content. Balance with other macronutrients.";
pub const HIGH_CARB_ADVICE: &str = "High carbohydrate content. Balance your meal.";
pub const LOW_CARB_ADVICE: &str = "Low carbohydrate content. Include wholesome carbs.";
pub const HIGH_FAT_ADVICE: &str = "High fat content. Try low-fat alternatives.";
pub const LOW_FAT_ADVICE: &str = "Low fat content. Include healthy fats for balance.";
pub const BALANCED_MEAL: &str = "Your meal looks balanced!";

/// Produces advisory messages in rule order. `totals` are the rounded meal
/// totals; `total_grams` is the unrounded sum of input weights.
pub fn meal_suggestions(totals: &MacroTotals, total_grams: f64) -> Vec<String> {
    let mut suggestions = Vec::new();

    if total_grams > LARGE_PORTION_GRAMS {
        suggestions.push(LARGE_PORTION_WARNING);
    }

    if totals.calories > HIGH_CALORIES {
        suggestions.push(HIGH_CALORIE_ADVICE);
    } else if totals.calories < LOW_CALORIES {
        suggestions.push(LOW_CALORIE_ADVICE);
    }

    if totals.protein < LOW_PROTEIN {
        suggestions.push(LOW_PROTEIN_ADVICE);
    } else if totals.protein > HIGH_PROTEIN {
        suggestions.push(HIGH_PROTEIN_ADVICE);
    }

    if totals.carbs > HIGH_CARBS {
        suggestions.push(HIGH_CARB_ADVICE);
    } else if totals.carbs < LOW_CARBS {
        suggestions.push(LOW_CARB_ADVICE);
    }

    if totals.fat > HIGH_FAT {
        suggestions.push(HIGH_FAT_ADVICE);
    } else if totals.fat < LOW_FAT {
        suggestions.push(LOW_FAT_ADVICE);
    }

    if suggestions.is_empty() {
        suggestions.push(BALANCED_MEAL);
    }

    suggestions.into_iter().map(str::to_string).collect()
}
