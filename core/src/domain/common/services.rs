use crate::domain::{food_analysis::ports::LLMClient, nutrition::ports::NutritionRepository};

/// Stateless service bundle. Every domain service trait is implemented on it,
/// generic over the adapters it talks to.
#[derive(Clone)]
pub struct Service<NR, LLM>
where
    NR: NutritionRepository,
    LLM: LLMClient,
{
    pub(crate) nutrition_repository: NR,
    pub(crate) llm_client: LLM,
}

impl<NR, LLM> Service<NR, LLM>
where
    NR: NutritionRepository,
    LLM: LLMClient,
{
    pub fn new(nutrition_repository: NR, llm_client: LLM) -> Self {
        Self {
            nutrition_repository,
            llm_client,
        }
    }
}
