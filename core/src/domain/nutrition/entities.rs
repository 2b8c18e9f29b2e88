use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Marker found in `food_origin_name` for restaurant ("외식") entries.
pub const DINE_OUT_MARKER: &str = "외식 ";

/// One row of the `FOOD_NUTRITION` reference table.
///
/// The five nutrients the analysis reads are typed; every other column is kept
/// verbatim in `extra` so the agent tool can hand the full row to the model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub food_name: String,
    #[serde(rename = "food_origin_name")]
    pub food_origin_category: String,
    pub energy_kcal: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugars_g: Option<f64>,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl NutritionRecord {
    pub fn new(food_name: impl Into<String>, food_origin_category: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            food_origin_category: food_origin_category.into(),
            ..Default::default()
        }
    }

    pub fn is_dine_out(&self) -> bool {
        self.food_origin_category.contains(DINE_OUT_MARKER)
    }
}
