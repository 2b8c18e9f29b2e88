use bapsang_core::domain::food_analysis::value_objects::ClassifierOutput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeFoodRequest {
    #[schema(example = "계란찜")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "predicted_label must be between 1 and 100 characters"
    ))]
    pub predicted_label: String,

    /// Percentage on a 0-100 scale, as printed by the classifier.
    #[schema(example = "87.1234")]
    #[validate(length(
        min = 1,
        max = 32,
        message = "confidence must be between 1 and 32 characters"
    ))]
    pub confidence: String,
}

impl From<AnalyzeFoodRequest> for ClassifierOutput {
    fn from(request: AnalyzeFoodRequest) -> Self {
        ClassifierOutput {
            predicted_label: request.predicted_label,
            confidence: request.confidence,
        }
    }
}
