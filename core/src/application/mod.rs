use anyhow::Context;
use tracing::info;

use crate::{
    domain::common::{BapsangConfig, services::Service},
    infrastructure::{llm::OpenAiLLMClient, nutrition::repositories::SqliteNutritionRepository},
};

pub type BapsangService = Service<SqliteNutritionRepository, OpenAiLLMClient>;

/// Wires the SQLite lookup and the OpenAI client into one service.
///
/// The database file is only checked for existence here; each lookup opens
/// its own read-only connection.
pub async fn create_service(config: BapsangConfig) -> Result<BapsangService, anyhow::Error> {
    let path = config.database.path;
    tokio::fs::metadata(&path)
        .await
        .with_context(|| format!("nutrition database not found at {}", path.display()))?;

    if config.llm.api_key.is_empty() {
        anyhow::bail!("LLM API key is empty");
    }

    info!(
        "Using nutrition database {} and model {}",
        path.display(),
        config.llm.model
    );

    Ok(Service::new(
        SqliteNutritionRepository::new(path),
        OpenAiLLMClient::new(config.llm),
    ))
}
