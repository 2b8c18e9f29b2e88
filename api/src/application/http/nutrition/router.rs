use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_nutrition::{__path_get_nutrition, get_nutrition},
    get_nutrition_matches::{__path_get_nutrition_matches, get_nutrition_matches},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_nutrition, get_nutrition_matches))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition/{{food_name}}", state.args.server.root_path),
            get(get_nutrition),
        )
        .route(
            &format!(
                "{}/nutrition/{{food_name}}/matches",
                state.args.server.root_path
            ),
            get(get_nutrition_matches),
        )
}
