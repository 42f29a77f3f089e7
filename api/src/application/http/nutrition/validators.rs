use nutrilens_core::domain::{
    common::parse_lenient_f64, nutrition::value_objects::IngredientPortion,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CalculateNutritionRequest {
    #[serde(default)]
    pub ingredients: Vec<IngredientAmountPayload>,
}

/// Clients send grams as numbers or numeric strings; anything else counts as 0.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct IngredientAmountPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub grams: Value,
}

impl CalculateNutritionRequest {
    pub fn into_portions(self) -> Vec<IngredientPortion> {
        self.ingredients
            .into_iter()
            .map(|ingredient| {
                let grams = grams_from_value(&ingredient.grams);
                IngredientPortion::new(ingredient.name, grams)
            })
            .collect()
    }
}

pub fn grams_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().filter(|g| g.is_finite()).unwrap_or(0.0),
        Value::String(text) => parse_lenient_f64(text),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_grams_from_value() {
        assert_eq!(grams_from_value(&json!(150)), 150.0);
        assert_eq!(grams_from_value(&json!(12.5)), 12.5);
        assert_eq!(grams_from_value(&json!(" 80 ")), 80.0);
        assert_eq!(grams_from_value(&json!("plenty")), 0.0);
        assert_eq!(grams_from_value(&json!(true)), 0.0);
        assert_eq!(grams_from_value(&Value::Null), 0.0);
    }

    #[test]
    fn test_missing_fields_default() {
        let request: CalculateNutritionRequest =
            serde_json::from_value(json!({"ingredients": [{"name": "Rice"}, {"grams": 20}]}))
                .unwrap();

        let portions = request.into_portions();
        assert_eq!(portions[0], IngredientPortion::new("Rice", 0.0));
        assert_eq!(portions[1], IngredientPortion::new("", 20.0));

        let empty: CalculateNutritionRequest = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_portions().is_empty());
    }
}
