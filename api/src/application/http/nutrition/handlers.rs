pub mod calculate_nutrition;
