use tracing::{debug, error};

use crate::domain::{
    common::services::Service,
    food_analysis::ports::LLMClient,
    nutrition::{
        entities::NutritionRecord,
        policies::select_preferred_record,
        ports::{NutritionRepository, NutritionService},
        value_objects::FoodNameQuery,
    },
};

impl<NR, LLM> NutritionService for Service<NR, LLM>
where
    NR: NutritionRepository,
    LLM: LLMClient,
{
    async fn search_food_records(&self, food_name: String) -> Vec<NutritionRecord> {
        let query = FoodNameQuery::new(&food_name);

        match self.nutrition_repository.find_by_name(query).await {
            Ok(records) => {
                debug!("{} nutrition records match {:?}", records.len(), food_name);
                records
            }
            Err(e) => {
                error!("Nutrition lookup for {:?} failed: {}", food_name, e);
                Vec::new()
            }
        }
    }

    async fn find_food_info(&self, food_names: Vec<String>) -> Option<NutritionRecord> {
        // An empty match list ends the whole lookup; later names are not tried.
        let food_name = food_names.into_iter().next()?;
        let records = self.search_food_records(food_name).await;

        select_preferred_record(records)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError, food_analysis::ports::MockLLMClient,
    };

    #[derive(Clone, Default)]
    struct FakeNutritionRepository {
        records: HashMap<String, Vec<NutritionRecord>>,
        fail: bool,
    }

    impl NutritionRepository for FakeNutritionRepository {
        async fn find_by_name(
            &self,
            query: FoodNameQuery,
        ) -> Result<Vec<NutritionRecord>, CoreError> {
            if self.fail {
                return Err(CoreError::StorageError("database is locked".to_string()));
            }
            Ok(self.records.get(query.as_str()).cloned().unwrap_or_default())
        }
    }

    /// Lookups never reach the model; the mock has no expectations and
    /// panics if called.
    fn service(
        repository: FakeNutritionRepository,
    ) -> Service<FakeNutritionRepository, MockLLMClient> {
        Service::new(repository, MockLLMClient::new())
    }

    fn repository() -> FakeNutritionRepository {
        let mut records = HashMap::new();
        records.insert(
            "김치찌개".to_string(),
            vec![
                NutritionRecord::new("김치찌개", "가정식"),
                NutritionRecord::new("참치 김치찌개", "외식 음식"),
            ],
        );
        records.insert(
            "달걀찜".to_string(),
            vec![NutritionRecord::new("달걀찜", "가정식")],
        );
        FakeNutritionRepository {
            records,
            fail: false,
        }
    }

    #[tokio::test]
    async fn test_find_food_info_prefers_dine_out() {
        let found = service(repository())
            .find_food_info(vec!["김치 찌개".to_string()])
            .await
            .unwrap();

        assert_eq!(found.food_name, "참치 김치찌개");
    }

    #[tokio::test]
    async fn test_find_food_info_uses_first_candidate() {
        let found = service(repository())
            .find_food_info(vec!["달걀찜".to_string(), "김치찌개".to_string()])
            .await
            .unwrap();

        assert_eq!(found.food_name, "달걀찜");
    }

    #[tokio::test]
    async fn test_find_food_info_stops_at_first_empty_candidate() {
        let found = service(repository())
            .find_food_info(vec!["계란찜".to_string(), "달걀찜".to_string()])
            .await;

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_find_food_info_without_candidates() {
        assert_eq!(service(repository()).find_food_info(vec![]).await, None);
    }

    #[tokio::test]
    async fn test_storage_failure_reads_as_not_found() {
        let failing = FakeNutritionRepository {
            fail: true,
            ..repository()
        };

        let service = service(failing);
        assert!(
            service
                .search_food_records("김치찌개".to_string())
                .await
                .is_empty()
        );
        assert_eq!(
            service.find_food_info(vec!["김치찌개".to_string()]).await,
            None
        );
    }
}
