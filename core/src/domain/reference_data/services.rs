use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, parse_lenient_f64, services::Service},
    meal::ports::FoodDetector,
    reference_data::{
        entities::{DishIngredientEntry, DishIngredients, IngredientCategory, NutritionRecord},
        ports::{ReferenceDataService, ReferenceSource},
        value_objects::{DishIngredientRow, NutritionRow, ReferenceDataSummary},
    },
    storage::ports::ImageStoragePort,
};

/// Dish name to reference ingredients. Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishCatalog {
    dishes: HashMap<String, DishIngredients>,
}

impl DishCatalog {
    /// Builds the catalog from rows in source order. A row with a food name
    /// opens (and resets) that dish; following rows attach their ingredient
    /// to it until the next food name appears.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = DishIngredientRow>,
    {
        let mut dishes: HashMap<String, DishIngredients> = HashMap::new();
        let mut current_dish: Option<String> = None;

        for row in rows {
            let food_name = row.food_name.trim();
            if !food_name.is_empty() {
                dishes.insert(food_name.to_string(), DishIngredients::default());
                current_dish = Some(food_name.to_string());
            }

            let ingredient_name = row.ingredient_name.trim();
            if ingredient_name.is_empty() {
                continue;
            }

            let Some(dish) = current_dish.as_ref().and_then(|name| dishes.get_mut(name)) else {
                continue;
            };

            let category = IngredientCategory::from_label(&row.ingredient_type).unwrap_or_else(|| {
                warn!(
                    ingredient = %ingredient_name,
                    label = %row.ingredient_type,
                    "Unknown ingredient type, treating as main"
                );
                IngredientCategory::Main
            });

            dish.push(
                category,
                DishIngredientEntry {
                    name: ingredient_name.to_string(),
                    quantity_grams: parse_lenient_f64(&row.std_quantity),
                    unit: row.std_unit.trim().to_string(),
                },
            );
        }

        Self { dishes }
    }

    pub fn get(&self, dish_name: &str) -> Option<&DishIngredients> {
        self.dishes.get(dish_name)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// Nutrition records keyed by lowercased, trimmed description. Insertion
/// order is kept because substring matching takes the first hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionTable {
    entries: Vec<(String, NutritionRecord)>,
    positions: HashMap<String, usize>,
}

impl NutritionTable {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = NutritionRow>,
    {
        let mut table = Self::default();
        for row in rows {
            let record = NutritionRecord {
                calories: parse_lenient_f64(&row.calorie_value),
                protein: parse_lenient_f64(&row.protein_value),
                carbs: parse_lenient_f64(&row.carbohydrate_value),
                fat: parse_lenient_f64(&row.fat),
            };
            table.insert(row.description.trim().to_lowercase(), record);
        }
        table
    }

    /// Duplicate keys replace the record but keep their first position.
    pub fn insert(&mut self, key: String, record: NutritionRecord) {
        match self.positions.get(&key) {
            Some(&position) => self.entries[position].1 = record,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&NutritionRecord> {
        self.positions.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NutritionRecord)> {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both reference tables. Never mutated once built; reloading produces a new
/// store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceDataStore {
    pub dishes: DishCatalog,
    pub nutrition: NutritionTable,
}

impl ReferenceDataStore {
    pub fn new(dishes: DishCatalog, nutrition: NutritionTable) -> Self {
        Self { dishes, nutrition }
    }

    #[instrument(skip(source))]
    pub fn load<S>(source: &S) -> Result<Self, CoreError>
    where
        S: ReferenceSource + ?Sized,
    {
        let dishes = DishCatalog::from_rows(source.dish_ingredient_rows()?);
        let nutrition = NutritionTable::from_rows(source.nutrition_rows()?);

        info!(
            dishes = dishes.len(),
            nutrition_entries = nutrition.len(),
            "Reference data loaded"
        );

        Ok(Self::new(dishes, nutrition))
    }

    pub fn summary(&self) -> ReferenceDataSummary {
        ReferenceDataSummary {
            dishes: self.dishes.len(),
            nutrition_entries: self.nutrition.len(),
        }
    }
}

/// Shared holder of the active store. The lock only guards the pointer, so
/// readers never wait on a reload that is still building its tables.
#[derive(Debug)]
pub struct ReferenceDataHandle {
    current: RwLock<Arc<ReferenceDataStore>>,
}

impl ReferenceDataHandle {
    pub fn new(store: ReferenceDataStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    pub fn snapshot(&self) -> Arc<ReferenceDataStore> {
        Arc::clone(&self.current.read())
    }

    pub fn replace(&self, store: ReferenceDataStore) {
        *self.current.write() = Arc::new(store);
    }
}

impl<RS, D, IS> ReferenceDataService for Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    fn reference_data_summary(&self) -> ReferenceDataSummary {
        self.reference_data.snapshot().summary()
    }

    async fn reload_reference_data(&self) -> Result<ReferenceDataSummary, CoreError> {
        let source = Arc::clone(&self.reference_source);
        let store = tokio::task::spawn_blocking(move || ReferenceDataStore::load(source.as_ref()))
            .await
            .map_err(|e| {
                tracing::error!("Reference data reload task failed: {}", e);
                CoreError::ReferenceLoad(e.to_string())
            })?
            .inspect_err(|e| warn!(error = %e, "Reference data reload failed, keeping current tables"))?;

        let summary = store.summary();
        self.reference_data.replace(store);
        info!(
            dishes = summary.dishes,
            nutrition_entries = summary.nutrition_entries,
            "Reference data reloaded"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference_data::ports::MockReferenceSource;

    fn dish_row(food: &str, ingredient: &str, kind: &str, quantity: &str) -> DishIngredientRow {
        DishIngredientRow {
            food_name: food.to_string(),
            ingredient_name: ingredient.to_string(),
            ingredient_type: kind.to_string(),
            std_quantity: quantity.to_string(),
            std_unit: "g".to_string(),
        }
    }

    fn nutrition_row(description: &str, calories: &str) -> NutritionRow {
        NutritionRow {
            description: description.to_string(),
            calorie_value: calories.to_string(),
            protein_value: "1".to_string(),
            carbohydrate_value: "2".to_string(),
            fat: "3".to_string(),
        }
    }

    #[test]
    fn test_catalog_groups_rows_under_last_dish() {
        let catalog = DishCatalog::from_rows(vec![
            dish_row("Biryani", "Rice", "main", "150"),
            dish_row("", "Chicken", "Main", "100"),
            dish_row("", "Raita", "additional", "50"),
            dish_row("Roti", "Wheat flour", "", "40"),
        ]);

        let biryani = catalog.get("Biryani").unwrap();
        assert_eq!(biryani.main.len(), 2);
        assert_eq!(biryani.main[1].name, "Chicken");
        assert_eq!(biryani.main[1].quantity_grams, 100.0);
        assert_eq!(biryani.additional.len(), 1);
        assert_eq!(biryani.additional[0].name, "Raita");

        let roti = catalog.get("Roti").unwrap();
        assert_eq!(roti.main[0].name, "Wheat flour");
        assert!(catalog.get("roti").is_none());
    }

    #[test]
    fn test_catalog_skips_blank_ingredients_and_orphan_rows() {
        let catalog = DishCatalog::from_rows(vec![
            dish_row("", "Salt", "main", "1"),
            dish_row("Idli", "", "main", "10"),
            dish_row("", "   ", "additional", "5"),
        ]);

        assert_eq!(catalog.len(), 1);
        let idli = catalog.get("Idli").unwrap();
        assert!(idli.main.is_empty());
        assert!(idli.additional.is_empty());
    }

    #[test]
    fn test_catalog_repeated_dish_resets_entries() {
        let catalog = DishCatalog::from_rows(vec![
            dish_row("Roll", "Maida", "main", "60"),
            dish_row("Roll", "Paneer", "main", "80"),
        ]);

        let roll = catalog.get("Roll").unwrap();
        assert_eq!(roll.main.len(), 1);
        assert_eq!(roll.main[0].name, "Paneer");
    }

    #[test]
    fn test_catalog_malformed_quantity_is_zero_and_unknown_type_is_main() {
        let catalog = DishCatalog::from_rows(vec![dish_row("Gravy", "Onion", "garnish", "a lot")]);

        let gravy = catalog.get("Gravy").unwrap();
        assert_eq!(gravy.main[0].quantity_grams, 0.0);
        assert!(gravy.additional.is_empty());
    }

    #[test]
    fn test_nutrition_table_normalizes_keys_and_overwrites_in_place() {
        let table = NutritionTable::from_rows(vec![
            nutrition_row("  Rice ", "130"),
            nutrition_row("Milk", "42"),
            nutrition_row("RICE", "135"),
            nutrition_row("Ghee", "not a number"),
        ]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("rice").unwrap().calories, 135.0);
        assert_eq!(table.get("ghee").unwrap().calories, 0.0);
        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["rice", "milk", "ghee"]);
    }

    #[test]
    fn test_load_is_deterministic() {
        let mut source = MockReferenceSource::new();
        source
            .expect_dish_ingredient_rows()
            .times(2)
            .returning(|| Ok(vec![dish_row("Donut", "Flour", "main", "50")]));
        source
            .expect_nutrition_rows()
            .times(2)
            .returning(|| Ok(vec![nutrition_row("flour", "364")]));

        let first = ReferenceDataStore::load(&source).unwrap();
        let second = ReferenceDataStore::load(&source).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.summary(),
            ReferenceDataSummary {
                dishes: 1,
                nutrition_entries: 1
            }
        );
    }

    #[test]
    fn test_load_propagates_source_failure() {
        let mut source = MockReferenceSource::new();
        source
            .expect_dish_ingredient_rows()
            .returning(|| Err(CoreError::ReferenceLoad("missing file".to_string())));

        let result = ReferenceDataStore::load(&source);
        assert_eq!(
            result,
            Err(CoreError::ReferenceLoad("missing file".to_string()))
        );
    }

    #[test]
    fn test_handle_swaps_whole_store() {
        let handle = ReferenceDataHandle::new(ReferenceDataStore::default());
        let before = handle.snapshot();

        let mut nutrition = NutritionTable::default();
        nutrition.insert("rice".to_string(), NutritionRecord::ZERO);
        handle.replace(ReferenceDataStore::new(DishCatalog::default(), nutrition));

        assert!(before.nutrition.is_empty());
        assert_eq!(handle.snapshot().nutrition.len(), 1);
    }
}
