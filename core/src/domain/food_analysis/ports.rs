use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisOutcome, ChatCompletion, ChatMessage, ToolDefinition},
        value_objects::AnalyzeFoodInput,
    },
};

/// LLM Client trait for calling chat models with function tools
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// One completion round-trip. Tool calls in the reply are returned, not run.
    fn chat(
        &self,
        messages: Vec<ChatMessage>,
        tools: Vec<ToolDefinition>,
    ) -> impl Future<Output = Result<ChatCompletion, CoreError>> + Send;
}

/// Service trait for food analysis business logic
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;
}
