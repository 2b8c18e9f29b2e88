use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{ChatMessage, ToolCall},
        ports::LLMClient,
        schema::{FOOD_INFO_NOT_FOUND, FOOD_INFO_TOOL_NAME, get_food_info_tool},
    },
    nutrition::ports::NutritionService,
};

/// Upper bound on model round-trips for one answer.
pub const MAX_AGENT_ITERATIONS: usize = 15;

#[derive(Debug, Deserialize)]
struct FoodInfoArgs {
    food_name: String,
}

/// Runs the tool-calling loop until the model answers in plain text.
///
/// LLM errors propagate; tool problems are reported back to the model as text.
/// Hitting [`MAX_AGENT_ITERATIONS`] yields an empty answer.
pub async fn run_nutrition_agent<L, N>(
    llm_client: &L,
    nutrition: &N,
    system_prompt: &str,
    task_prompt: String,
) -> Result<String, CoreError>
where
    L: LLMClient,
    N: NutritionService,
{
    let tools = vec![get_food_info_tool()];
    let mut messages = vec![ChatMessage::system(system_prompt), ChatMessage::user(task_prompt)];

    for iteration in 0..MAX_AGENT_ITERATIONS {
        let completion = llm_client.chat(messages.clone(), tools.clone()).await?;

        if completion.tool_calls.is_empty() {
            debug!(
                "Agent answered after {} iterations (finish_reason: {:?})",
                iteration + 1,
                completion.finish_reason
            );
            return Ok(completion.content.unwrap_or_default());
        }

        info!(
            "Iteration {}: executing {} tool calls",
            iteration,
            completion.tool_calls.len()
        );

        let tool_calls = completion.tool_calls.clone();
        messages.push(ChatMessage::assistant(completion.content, completion.tool_calls));

        for tool_call in &tool_calls {
            let output = execute_tool_call(nutrition, tool_call).await;
            messages.push(ChatMessage::tool(tool_call.id.clone(), output));
        }
    }

    warn!(
        "Agent stopped after {} iterations without a final answer",
        MAX_AGENT_ITERATIONS
    );
    Ok(String::new())
}

async fn execute_tool_call<N: NutritionService>(nutrition: &N, tool_call: &ToolCall) -> String {
    if tool_call.name != FOOD_INFO_TOOL_NAME {
        warn!("Model requested unknown tool {:?}", tool_call.name);
        return format!(
            "{} is not a valid tool, try {}.",
            tool_call.name, FOOD_INFO_TOOL_NAME
        );
    }

    let args: FoodInfoArgs = match serde_json::from_str(&tool_call.arguments) {
        Ok(args) => args,
        Err(e) => {
            warn!("Invalid {} arguments {:?}: {}", FOOD_INFO_TOOL_NAME, tool_call.arguments, e);
            return format!("Invalid arguments for {FOOD_INFO_TOOL_NAME}: {e}");
        }
    };

    info!("Executing tool: {}({})", FOOD_INFO_TOOL_NAME, args.food_name);

    match nutrition.find_food_info(vec![args.food_name]).await {
        Some(record) => {
            serde_json::to_string(&record).unwrap_or_else(|_| FOOD_INFO_NOT_FOUND.to_string())
        }
        None => FOOD_INFO_NOT_FOUND.to_string(),
    }
}
