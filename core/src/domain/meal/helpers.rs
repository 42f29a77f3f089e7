use std::collections::{BTreeSet, HashSet};

use crate::domain::{
    meal::entities::{Detection, MealResolution},
    nutrition::value_objects::IngredientPortion,
    reference_data::{entities::IngredientCategory, services::DishCatalog},
};

/// Highest-confidence detection; the earliest one wins ties.
pub fn primary_detection(detections: &[Detection]) -> Option<&Detection> {
    detections.iter().fold(None, |best: Option<&Detection>, candidate| match best {
        Some(current) if current.confidence >= candidate.confidence => Some(current),
        _ => Some(candidate),
    })
}

/// Maps detections to the ingredients of their dishes.
///
/// Dishes are visited in sorted name order. Each ingredient name is emitted
/// once across both lists, the first time it is seen. Additional
/// ingredients carry zero grams. Unknown dishes contribute nothing.
pub fn resolve_ingredients(detections: &[Detection], catalog: &DishCatalog) -> MealResolution {
    let dish_names: BTreeSet<&str> = detections
        .iter()
        .map(|detection| detection.dish_name.as_str())
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut main_ingredients = Vec::new();
    let mut additional_ingredients = Vec::new();

    for dish in dish_names.iter().filter_map(|name| catalog.get(name)) {
        for entry in dish.entries(IngredientCategory::Main) {
            if seen.insert(entry.name.as_str()) {
                main_ingredients.push(IngredientPortion::new(&entry.name, entry.quantity_grams));
            }
        }
        for entry in dish.entries(IngredientCategory::Additional) {
            if seen.insert(entry.name.as_str()) {
                additional_ingredients.push(IngredientPortion::new(&entry.name, 0.0));
            }
        }
    }

    MealResolution {
        primary: primary_detection(detections).cloned(),
        all_dishes: dish_names.into_iter().collect::<Vec<_>>().join(", "),
        main_ingredients,
        additional_ingredients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference_data::value_objects::DishIngredientRow;

    fn row(food: &str, ingredient: &str, kind: &str, quantity: &str) -> DishIngredientRow {
        DishIngredientRow {
            food_name: food.to_string(),
            ingredient_name: ingredient.to_string(),
            ingredient_type: kind.to_string(),
            std_quantity: quantity.to_string(),
            std_unit: "g".to_string(),
        }
    }

    fn catalog() -> DishCatalog {
        DishCatalog::from_rows(vec![
            row("Roti", "Wheat flour", "main", "40"),
            row("", "Ghee", "additional", "5"),
            row("Biryani", "Rice", "main", "150"),
            row("", "Chicken", "main", "100"),
            row("", "Ghee", "main", "10"),
            row("", "Raita", "additional", "50"),
            row("Gravy", "Onion", "main", "30"),
            row("", "Rice", "main", "100"),
            row("", "Cream", "additional", "20"),
        ])
    }

    fn names(portions: &[IngredientPortion]) -> Vec<&str> {
        portions.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_dishes_processed_in_sorted_order() {
        let detections = vec![Detection::new("Roti", 0.9), Detection::new("Biryani", 0.6)];

        let resolution = resolve_ingredients(&detections, &catalog());

        assert_eq!(
            names(&resolution.main_ingredients),
            vec!["Rice", "Chicken", "Ghee", "Wheat flour"]
        );
        assert_eq!(names(&resolution.additional_ingredients), vec!["Raita"]);
        assert_eq!(resolution.primary, Some(Detection::new("Roti", 0.9)));
        assert_eq!(resolution.all_dishes, "Biryani, Roti");
    }

    #[test]
    fn test_quantities_main_kept_additional_zeroed() {
        let resolution = resolve_ingredients(&[Detection::new("Gravy", 0.5)], &catalog());

        assert_eq!(
            resolution.main_ingredients,
            vec![
                IngredientPortion::new("Onion", 30.0),
                IngredientPortion::new("Rice", 100.0),
            ]
        );
        assert_eq!(
            resolution.additional_ingredients,
            vec![IngredientPortion::new("Cream", 0.0)]
        );
    }

    #[test]
    fn test_ingredients_deduplicated_across_dishes() {
        let detections = vec![
            Detection::new("Gravy", 0.4),
            Detection::new("Biryani", 0.7),
            Detection::new("Gravy", 0.35),
        ];

        let resolution = resolve_ingredients(&detections, &catalog());

        // Biryani's 150 g of rice wins over Gravy's 100 g.
        assert_eq!(
            resolution.main_ingredients,
            vec![
                IngredientPortion::new("Rice", 150.0),
                IngredientPortion::new("Chicken", 100.0),
                IngredientPortion::new("Ghee", 10.0),
                IngredientPortion::new("Onion", 30.0),
            ]
        );
        assert_eq!(
            names(&resolution.additional_ingredients),
            vec!["Raita", "Cream"]
        );
        assert_eq!(resolution.all_dishes, "Biryani, Gravy");
    }

    #[test]
    fn test_unknown_dish_contributes_nothing() {
        let detections = vec![Detection::new("Kulfi", 0.8)];

        let resolution = resolve_ingredients(&detections, &catalog());

        assert!(resolution.main_ingredients.is_empty());
        assert!(resolution.additional_ingredients.is_empty());
        assert_eq!(resolution.all_dishes, "Kulfi");
        assert_eq!(resolution.primary, Some(Detection::new("Kulfi", 0.8)));
    }

    #[test]
    fn test_empty_detections() {
        let resolution = resolve_ingredients(&[], &catalog());
        assert_eq!(resolution, MealResolution::default());
    }

    #[test]
    fn test_primary_detection_ties_keep_first() {
        let detections = vec![
            Detection::new("Idli", 0.5),
            Detection::new("Dhokla", 0.8),
            Detection::new("Jalebi", 0.8),
        ];
        assert_eq!(
            primary_detection(&detections),
            Some(&Detection::new("Dhokla", 0.8))
        );
        assert_eq!(primary_detection(&[]), None);
    }
}
