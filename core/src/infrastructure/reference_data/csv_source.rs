use std::{collections::HashMap, fs::File, io::Read, path::Path, path::PathBuf};

use csv::StringRecord;
use tracing::instrument;

use crate::domain::{
    common::{ReferenceDataConfig, entities::app_errors::CoreError},
    reference_data::{
        ports::ReferenceSource,
        value_objects::{DishIngredientRow, NutritionRow},
    },
};

const DISH_INGREDIENT_COLUMNS: [&str; 2] = ["food_name", "ingredient_name"];
const NUTRITION_COLUMNS: [&str; 1] = ["description"];

/// Reads the reference tables from UTF-8 CSV files with a header row.
#[derive(Debug, Clone)]
pub struct CsvReferenceSource {
    ingredients_path: PathBuf,
    nutrition_path: PathBuf,
}

impl CsvReferenceSource {
    pub fn new(config: ReferenceDataConfig) -> Self {
        Self {
            ingredients_path: config.ingredients_path,
            nutrition_path: config.nutrition_path,
        }
    }
}

impl ReferenceSource for CsvReferenceSource {
    #[instrument(skip(self), fields(path = %self.ingredients_path.display()))]
    fn dish_ingredient_rows(&self) -> Result<Vec<DishIngredientRow>, CoreError> {
        let table = read_csv_file(&self.ingredients_path, &DISH_INGREDIENT_COLUMNS)?;
        Ok(table.rows().map(dish_ingredient_row).collect())
    }

    #[instrument(skip(self), fields(path = %self.nutrition_path.display()))]
    fn nutrition_rows(&self) -> Result<Vec<NutritionRow>, CoreError> {
        let table = read_csv_file(&self.nutrition_path, &NUTRITION_COLUMNS)?;
        Ok(table.rows().map(nutrition_row).collect())
    }
}

fn dish_ingredient_row(row: CsvRow<'_>) -> DishIngredientRow {
    DishIngredientRow {
        food_name: row.field("food_name"),
        ingredient_name: row.field("ingredient_name"),
        ingredient_type: row.field("type"),
        std_quantity: row.field("std_quantity"),
        std_unit: row.field("std_unit"),
    }
}

fn nutrition_row(row: CsvRow<'_>) -> NutritionRow {
    NutritionRow {
        description: row.field("description"),
        calorie_value: row.field("calorie_value"),
        protein_value: row.field("protein_value"),
        carbohydrate_value: row.field("carbohydrate_value"),
        fat: row.field("fat"),
    }
}

/// Records of one CSV file with their header positions.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

/// One record viewed through the header of its table.
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl CsvTable {
    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.records.iter().map(|record| CsvRow {
            columns: &self.columns,
            record,
        })
    }
}

impl CsvRow<'_> {
    /// Cell text for `column`. Columns missing from the header and cells
    /// missing from a short record both read as an empty string.
    pub fn field(&self, column: &str) -> String {
        self.columns
            .get(column)
            .and_then(|&position| self.record.get(position))
            .unwrap_or("")
            .to_string()
    }
}

fn read_csv_file(path: &Path, required_columns: &[&str]) -> Result<CsvTable, CoreError> {
    let file = File::open(path).map_err(|e| {
        tracing::error!("Failed to open reference file {}: {}", path.display(), e);
        CoreError::ReferenceLoad(format!("{}: {}", path.display(), e))
    })?;

    read_csv(file, required_columns)
        .map_err(|e| CoreError::ReferenceLoad(format!("{}: {}", path.display(), e)))
}

/// Reads every record, failing only if a required column is absent from the
/// header or the file is not valid CSV. Records may be shorter or longer
/// than the header.
pub fn read_csv<R>(reader: R, required_columns: &[&str]) -> Result<CsvTable, String>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut columns: HashMap<String, usize> = HashMap::new();
    for (position, header) in reader.headers().map_err(|e| e.to_string())?.iter().enumerate() {
        columns.entry(header.to_string()).or_insert(position);
    }

    let missing: Vec<&str> = required_columns
        .iter()
        .copied()
        .filter(|column| !columns.contains_key(*column))
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing required columns: {}", missing.join(", ")));
    }

    let records = reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| e.to_string())?;

    Ok(CsvTable { columns, records })
}
