use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::AnalysisResult;

/// One row of the nutrients table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayNutrient {
    pub label: String,
    pub value: f64,
}

/// An [`AnalysisResult`] cleaned up for display: markdown emphasis removed and
/// the last tip split off as a one-line summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayAnalysis {
    pub food_name: String,
    pub score_label: String,
    pub nutrients: Vec<DisplayNutrient>,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub summary: Option<String>,
}

pub fn present_analysis(result: &AnalysisResult) -> DisplayAnalysis {
    let reasons = result.reasons.iter().map(|line| clean_markdown(line)).collect();

    let (summary, tips) = match result.tips.split_last() {
        Some((last, rest)) => (
            Some(clean_markdown(last)),
            rest.iter().map(|line| clean_markdown(line)).collect(),
        ),
        None => (None, Vec::new()),
    };

    DisplayAnalysis {
        food_name: result.food_name.clone(),
        score_label: result.score_label.clone(),
        nutrients: result
            .nutrients
            .labeled()
            .into_iter()
            .map(|(label, value)| DisplayNutrient {
                label: label.to_string(),
                value,
            })
            .collect(),
        reasons,
        tips,
        summary,
    }
}

/// Drops a leading `-**` marker and every `**` pair in the line.
pub fn clean_markdown(line: &str) -> String {
    let line = line.trim_start();
    let line = match line.strip_prefix('-') {
        Some(rest) if rest.trim_start().starts_with("**") => rest.trim_start(),
        _ => line,
    };

    line.replace("**", "").trim().to_string()
}
