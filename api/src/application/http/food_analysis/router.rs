use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_food::{__path_analyze_food, analyze_food};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_food))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/food-analysis", state.args.server.root_path),
        post(analyze_food),
    )
}
