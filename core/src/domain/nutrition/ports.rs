use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, value_objects::FoodNameQuery},
};

/// Read-only access to the nutrition reference table.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionRepository: Send + Sync {
    /// Every record whose space-stripped name contains the query, best match
    /// first (prefix matches, then other containing matches, store order
    /// within a rank).
    fn find_by_name(
        &self,
        query: FoodNameQuery,
    ) -> impl Future<Output = Result<Vec<NutritionRecord>, CoreError>> + Send;
}

/// Nutrition lookup as seen by callers: storage failures never surface here.
pub trait NutritionService: Send + Sync {
    fn search_food_records(
        &self,
        food_name: String,
    ) -> impl Future<Output = Vec<NutritionRecord>> + Send;

    fn find_food_info(
        &self,
        food_names: Vec<String>,
    ) -> impl Future<Output = Option<NutritionRecord>> + Send;
}
