pub mod nutrition_repository;

pub use nutrition_repository::SqliteNutritionRepository;
