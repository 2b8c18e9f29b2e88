use utoipa::OpenApi;

use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc,
    health::{__path_health_live, health_live},
    nutrition::router::NutritionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bapsang API"
    ),
    paths(health_live),
    nest(
        (path = "/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
