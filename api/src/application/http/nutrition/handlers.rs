pub mod get_nutrition;
pub mod get_nutrition_matches;
