use axum::extract::{Path, State};
use bapsang_core::domain::nutrition::{entities::NutritionRecord, ports::NutritionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetNutritionResponse {
    pub data: NutritionRecord,
}

#[utoipa::path(
    get,
    path = "/{food_name}",
    tag = "nutrition",
    summary = "Get nutrition facts",
    description = "Returns the preferred nutrition record for a dish. Restaurant entries win over other matches.",
    params(
        ("food_name" = String, Path, description = "Dish name; spaces are ignored"),
    ),
    responses(
        (status = 200, body = GetNutritionResponse),
        (status = 404, body = ApiErrorResponse, description = "No matching dish")
    )
)]
pub async fn get_nutrition(
    Path(food_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetNutritionResponse>, ApiError> {
    let record = state
        .service
        .find_food_info(vec![food_name.clone()])
        .await
        .ok_or_else(|| ApiError::NotFound(format!("No nutrition data for {food_name}")))?;

    Ok(Response::OK(GetNutritionResponse { data: record }))
}
