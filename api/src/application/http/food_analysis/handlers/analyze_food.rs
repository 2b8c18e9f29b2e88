use axum::extract::State;
use bapsang_core::domain::food_analysis::{
    entities::AnalysisOutcome,
    ports::FoodAnalysisService,
    presentation::{DisplayAnalysis, present_analysis},
    value_objects::{AnalyzeFoodInput, ClassifierOutput, format_confidence},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    food_analysis::validators::AnalyzeFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: AnalysisOutcome,
    /// Present only for analysed outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayAnalysis>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food-analysis",
    summary = "Analyze a classified dish",
    description = "Scores a dish from the image classifier's label and confidence. Low-confidence predictions come back as unclassified without calling the LLM.",
    request_body = AnalyzeFoodRequest,
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, body = ApiErrorResponse, description = "Invalid label or confidence"),
        (status = 502, body = ApiErrorResponse, description = "LLM call failed")
    )
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeFoodRequest>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let input = AnalyzeFoodInput::try_from(ClassifierOutput::from(payload))?;
    info!(
        "Analyzing {:?} at confidence {}",
        input.classifier_label,
        format_confidence(input.confidence)
    );

    let outcome = state
        .service
        .analyze_food(input)
        .await
        .map_err(ApiError::from)?;

    let display = outcome.as_analyzed().map(present_analysis);

    Ok(Response::OK(AnalyzeFoodResponse {
        data: outcome,
        display,
    }))
}
