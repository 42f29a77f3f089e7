use crate::domain::{
    nutrition::ports::NutritionLookup,
    reference_data::{entities::NutritionRecord, services::NutritionTable},
};

impl NutritionLookup for NutritionTable {
    /// Exact key first, then the first key (in table order) that contains or
    /// is contained in the name. This is a first-hit scan, not a best match.
    fn resolve(&self, name: &str) -> NutritionRecord {
        let name = name.to_lowercase();

        if let Some(record) = self.get(&name) {
            return *record;
        }

        self.iter()
            .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
            .map(|(_, record)| *record)
            .unwrap_or(NutritionRecord::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(calories: f64) -> NutritionRecord {
        NutritionRecord {
            calories,
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
        }
    }

    fn table() -> NutritionTable {
        let mut table = NutritionTable::default();
        table.insert("rice".to_string(), record(130.0));
        table.insert("basmati rice".to_string(), record(121.0));
        table.insert("chicken breast".to_string(), record(165.0));
        table
    }

    #[test]
    fn test_resolve_exact_match_is_case_insensitive() {
        assert_eq!(table().resolve("Basmati RICE"), record(121.0));
    }

    #[test]
    fn test_resolve_key_contained_in_name() {
        assert_eq!(table().resolve("Steamed rice"), record(130.0));
    }

    #[test]
    fn test_resolve_name_contained_in_key() {
        assert_eq!(table().resolve("chicken"), record(165.0));
    }

    #[test]
    fn test_resolve_first_match_wins_over_longer_match() {
        // "rice" precedes "basmati rice" in the table.
        assert_eq!(table().resolve("aged basmati rice"), record(130.0));
    }

    #[test]
    fn test_resolve_miss_is_zero() {
        assert_eq!(table().resolve("saffron"), NutritionRecord::ZERO);
        assert_eq!(
            NutritionTable::default().resolve("rice"),
            NutritionRecord::ZERO
        );
    }
}
