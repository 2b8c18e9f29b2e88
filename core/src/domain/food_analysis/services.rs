use tracing::{error, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        agent::run_nutrition_agent,
        entities::{
            AnalysisOutcome, AnalysisResult, AnalysisResultConfig, Nutrients, UnclassifiedResult,
            score_label,
        },
        extractor::extract_answer,
        policies::{UNCLASSIFIED_LABEL, UNCLASSIFIED_SCORE, is_classifiable, resolve_food_alias},
        ports::{FoodAnalysisService, LLMClient},
        prompts::{SYSTEM_PROMPT, build_task_prompt},
        value_objects::AnalyzeFoodInput,
    },
    nutrition::ports::{NutritionRepository, NutritionService},
};

impl<NR, LLM> FoodAnalysisService for Service<NR, LLM>
where
    NR: NutritionRepository,
    LLM: LLMClient,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisOutcome, CoreError> {
        // 1. Low confidence short-circuits before any lookup or model call
        if !is_classifiable(input.confidence) {
            info!(
                "Classifier confidence {:.4} for {:?} is too low, skipping analysis",
                input.confidence, input.classifier_label
            );
            return Ok(AnalysisOutcome::Unclassified(UnclassifiedResult {
                label: UNCLASSIFIED_LABEL.to_string(),
                classifier_label: input.classifier_label,
                confidence: input.confidence,
                health_score: UNCLASSIFIED_SCORE,
                score_label: score_label(UNCLASSIFIED_SCORE),
            }));
        }

        // 2. Map the classifier class onto the table's naming
        let food_name = resolve_food_alias(&input.classifier_label).to_string();

        // 3. Ask the agent
        let raw_response = run_nutrition_agent(
            &self.llm_client,
            self,
            SYSTEM_PROMPT,
            build_task_prompt(&food_name),
        )
        .await
        .map_err(|e| {
            error!("Nutrition agent failed for {:?}: {}", food_name, e);
            e
        })?;

        // 4. Parse the answer
        let answer = extract_answer(&raw_response);

        // 5. Nutrients come from the table directly, not from the agent
        let record = self.find_food_info(vec![food_name.clone()]).await;
        let nutrients = Nutrients::from_record(record.as_ref());

        info!(
            "Analysed {:?} (classifier label {:?}): score {}, {} reasons, {} tips",
            food_name,
            input.classifier_label,
            answer.health_score,
            answer.reasons.len(),
            answer.tips.len()
        );

        Ok(AnalysisOutcome::Analyzed(AnalysisResult::new(
            AnalysisResultConfig {
                food_name,
                classifier_label: input.classifier_label,
                confidence: input.confidence,
                health_score: answer.health_score,
                nutrients,
                reasons: answer.reasons,
                tips: answer.tips,
                raw_response,
            },
        )))
    }
}
