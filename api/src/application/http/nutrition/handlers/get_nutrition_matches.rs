use axum::extract::{Path, State};
use bapsang_core::domain::nutrition::{entities::NutritionRecord, ports::NutritionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionMatchesResponse {
    pub data: Vec<NutritionRecord>,
}

#[utoipa::path(
    get,
    path = "/{food_name}/matches",
    tag = "nutrition",
    summary = "List matching dishes",
    description = "Returns every record whose name contains the query, prefix matches first.",
    params(
        ("food_name" = String, Path, description = "Dish name; spaces are ignored"),
    ),
    responses(
        (status = 200, body = GetNutritionMatchesResponse)
    )
)]
pub async fn get_nutrition_matches(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetNutritionMatchesResponse>, ApiError> {
    let records = state.service.search_food_records(food_name).await;

    Ok(Response::OK(GetNutritionMatchesResponse { data: records }))
}
