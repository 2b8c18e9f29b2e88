use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// What the image classifier hands over for one upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassifierOutput {
    pub predicted_label: String,
    /// Percentage with four decimals, e.g. `"87.1234"`.
    pub confidence: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeFoodInput {
    pub classifier_label: String,
    /// Classifier confidence on a 0-100 scale.
    pub confidence: f64,
}

impl TryFrom<ClassifierOutput> for AnalyzeFoodInput {
    type Error = CoreError;

    fn try_from(output: ClassifierOutput) -> Result<Self, Self::Error> {
        parse_classifier_output(output)
    }
}

pub fn parse_classifier_output(output: ClassifierOutput) -> Result<AnalyzeFoodInput, CoreError> {
    let confidence = output
        .confidence
        .trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoreError::InvalidConfidence(output.confidence.clone()))?;

    Ok(AnalyzeFoodInput {
        classifier_label: output.predicted_label,
        confidence,
    })
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{confidence:.4}")
}

/// Fields recovered from the agent's free-text answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedAnswer {
    pub health_score: u32,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
}
