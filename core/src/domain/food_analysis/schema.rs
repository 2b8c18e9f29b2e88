use serde_json::json;

use crate::domain::food_analysis::entities::ToolDefinition;

pub const FOOD_INFO_TOOL_NAME: &str = "get_food_info";

/// Returned to the model when the table has nothing for the requested food.
pub const FOOD_INFO_NOT_FOUND: &str = "데이터베이스에서 해당 음식 정보를 찾을 수 없습니다.";

/// Returns the tool definition the agent exposes for nutrition lookups
pub fn get_food_info_tool() -> ToolDefinition {
    ToolDefinition {
        name: FOOD_INFO_TOOL_NAME.to_string(),
        description: "주어진 음식 이름에 해당하는 영양 정보를 문자열로 반환하는 도구입니다."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "food_name": {
                    "type": "string",
                    "description": "영양 정보를 조회할 음식 이름"
                }
            },
            "required": ["food_name"]
        }),
    }
}
