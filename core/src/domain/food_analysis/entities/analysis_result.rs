use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition::entities::NutritionRecord};

/// The five nutrients shown for a dish. Missing or null values read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Nutrients {
    pub calories: f64,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub sugar: f64,
}

impl Nutrients {
    pub fn from_record(record: Option<&NutritionRecord>) -> Self {
        let Some(record) = record else {
            return Self::default();
        };

        Self {
            calories: record.energy_kcal.unwrap_or(0.0),
            carbohydrates: record.carbohydrates_g.unwrap_or(0.0),
            protein: record.protein_g.unwrap_or(0.0),
            fat: record.fat_g.unwrap_or(0.0),
            sugar: record.sugars_g.unwrap_or(0.0),
        }
    }

    /// Display labels paired with values, in table order.
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("열량(kcal)", self.calories),
            ("탄수화물(g)", self.carbohydrates),
            ("단백질(g)", self.protein),
            ("지방(g)", self.fat),
            ("당(g)", self.sugar),
        ]
    }
}

pub fn score_label(score: u32) -> String {
    format!("{score}/100")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub food_name: String,
    pub classifier_label: String,
    pub confidence: f64,
    pub health_score: u32,
    pub score_label: String,
    pub nutrients: Nutrients,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub raw_response: String,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AnalysisResultConfig {
    pub food_name: String,
    pub classifier_label: String,
    pub confidence: f64,
    pub health_score: u32,
    pub nutrients: Nutrients,
    pub reasons: Vec<String>,
    pub tips: Vec<String>,
    pub raw_response: String,
}

impl AnalysisResult {
    pub fn new(config: AnalysisResultConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            food_name: config.food_name,
            classifier_label: config.classifier_label,
            confidence: config.confidence,
            health_score: config.health_score,
            score_label: score_label(config.health_score),
            nutrients: config.nutrients,
            reasons: config.reasons,
            tips: config.tips,
            raw_response: config.raw_response,
            analyzed_at: now,
        }
    }
}

/// Returned instead of an analysis when the classifier was not confident enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnclassifiedResult {
    pub label: String,
    pub classifier_label: String,
    pub confidence: f64,
    pub health_score: u32,
    pub score_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Unclassified(UnclassifiedResult),
    Analyzed(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn as_analyzed(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Analyzed(result) => Some(result),
            AnalysisOutcome::Unclassified(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrients_default_to_zero_without_record() {
        let nutrients = Nutrients::from_record(None);
        assert_eq!(nutrients, Nutrients::default());
        assert!(nutrients.labeled().iter().all(|(_, value)| *value == 0.0));
    }

    #[test]
    fn test_nutrients_replace_null_fields_with_zero() {
        let record = NutritionRecord {
            energy_kcal: Some(512.0),
            protein_g: Some(21.5),
            ..NutritionRecord::new("제육볶음", "외식 음식")
        };

        let nutrients = Nutrients::from_record(Some(&record));
        assert_eq!(nutrients.calories, 512.0);
        assert_eq!(nutrients.carbohydrates, 0.0);
        assert_eq!(nutrients.protein, 21.5);
        assert_eq!(nutrients.fat, 0.0);
        assert_eq!(nutrients.sugar, 0.0);
    }

    #[test]
    fn test_nutrients_serialize_five_keys_in_order() {
        let json = serde_json::to_string(&Nutrients::default()).unwrap();
        assert_eq!(
            json,
            r#"{"calories":0.0,"carbohydrates":0.0,"protein":0.0,"fat":0.0,"sugar":0.0}"#
        );
    }

    #[test]
    fn test_outcome_is_tagged_by_status() {
        let outcome = AnalysisOutcome::Unclassified(UnclassifiedResult {
            label: "분류 불가".to_string(),
            classifier_label: "비빔밥".to_string(),
            confidence: 12.5,
            health_score: 1,
            score_label: score_label(1),
        });

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unclassified");
        assert_eq!(json["score_label"], "1/100");
        assert!(outcome.as_analyzed().is_none());
    }
}
