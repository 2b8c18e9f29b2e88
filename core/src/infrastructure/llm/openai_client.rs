use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_analysis::{
        entities::{ChatCompletion, ChatMessage, ToolCall, ToolDefinition},
        ports::LLMClient,
    },
};

/// Chat completions client for OpenAI and compatible servers.
#[derive(Debug, Clone)]
pub struct OpenAiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<OpenAiTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<String>,
}

#[derive(Debug, Serialize)]
struct OpenAiTool {
    #[serde(rename = "type")]
    tool_type: String,
    function: OpenAiFunction,
}

#[derive(Debug, Serialize)]
struct OpenAiFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<OpenAiToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: OpenAiFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            tool_calls: message
                .tool_calls
                .iter()
                .map(|call| OpenAiToolCall {
                    id: call.id.clone(),
                    call_type: "function".to_string(),
                    function: OpenAiFunctionCall {
                        name: call.name.clone(),
                        arguments: call.arguments.clone(),
                    },
                })
                .collect(),
            tool_call_id: message.tool_call_id.clone(),
        }
    }
}

impl From<ToolDefinition> for OpenAiTool {
    fn from(tool: ToolDefinition) -> Self {
        Self {
            tool_type: "function".to_string(),
            function: OpenAiFunction {
                name: tool.name,
                description: tool.description,
                parameters: tool.parameters,
            },
        }
    }
}

impl TryFrom<OpenAiResponse> for ChatCompletion {
    type Error = CoreError;

    fn try_from(response: OpenAiResponse) -> Result<Self, Self::Error> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolCall {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();

        Ok(ChatCompletion {
            content: choice.message.content,
            tool_calls,
            finish_reason: choice.finish_reason,
        })
    }
}

impl OpenAiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        Self {
            api_key: config.api_key,
            model_name: config.model,
            base_url: config.base_url,
            temperature: config.temperature,
            client: Client::new(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn build_request(&self, messages: &[ChatMessage], tools: Vec<ToolDefinition>) -> OpenAiRequest {
        let tool_choice = (!tools.is_empty()).then(|| "auto".to_string());

        OpenAiRequest {
            model: self.model_name.clone(),
            messages: messages.iter().map(OpenAiMessage::from).collect(),
            temperature: self.temperature,
            tools: tools.into_iter().map(OpenAiTool::from).collect(),
            tool_choice,
        }
    }

    async fn call_openai_api(&self, request: OpenAiRequest) -> Result<ChatCompletion, CoreError> {
        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read LLM response: {}", e))
        })?;

        if !status.is_success() {
            error!("OpenAI API error: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status,
                error_message(&body)
            )));
        }

        parse_completion(&body)
    }
}

/// Pulls `error.message` out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiErrorResponse>(body)
        .map(|response| response.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

fn parse_completion(body: &str) -> Result<ChatCompletion, CoreError> {
    let response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse OpenAI response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
    })?;

    ChatCompletion::try_from(response)
}

impl LLMClient for OpenAiLLMClient {
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        tools: Vec<ToolDefinition>,
    ) -> Result<ChatCompletion, CoreError> {
        let request = self.build_request(&messages, tools);
        debug!(
            "Sending {} messages with {} tools to {}",
            request.messages.len(),
            request.tools.len(),
            self.model_name
        );

        let completion = self.call_openai_api(request).await?;
        debug!(
            "OpenAI returned {} tool calls (finish_reason: {:?})",
            completion.tool_calls.len(),
            completion.finish_reason
        );

        Ok(completion)
    }
}
