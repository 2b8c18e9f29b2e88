//! Prompts for the nutrition agent.
//!
//! The output format guide is what [`super::extractor`] parses; change the
//! section labels in both places together.

pub const SYSTEM_PROMPT: &str = "역할: 당신은 식품 영양 분석 전문가입니다.
목표:
1) 제공된 도구(get_food_info)로 입력된 음식의 영양 데이터를 조회합니다.
2) 조회된 데이터가 없으면, 일반적인 영양 지식을 기반으로 해당 음식의 성분을 추정합니다.
3) 영양 데이터를 근거로 건강 점수(0~100)를 산출하고, 과/부족 항목을 설명합니다.
4) 개선 팁(예: 나트륨 낮추기, 단백질 보완)을 제안합니다.
규칙:
- 데이터가 있으면 반드시 도구를 우선 사용할 것.
- 데이터가 없으면 추정하되, 반드시 실제 음식 유형에 맞도록 할 것.
- 출력은 마지막에 깔끔한 한국어 문단으로 제공.";

const OUTPUT_FORMAT_GUIDE: &str = "출력 형식 가이드:
1) 건강 점수: NN/100
2) 이유: (성분별 근거)
3) 개선 팁: (실천 가능한 제안 2~4개)";

pub fn build_task_prompt(food_name: &str) -> String {
    format!(
        "{food_name}의 영양 정보를 바탕으로
1) 건강 점수를 0~100으로 매겨줘.
2) 점수 이유를 성분별로 설명해줘.
3) 개선 팁을 알려줘.
{OUTPUT_FORMAT_GUIDE}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_prompt_names_food_and_format() {
        let prompt = build_task_prompt("달걀찜");
        assert!(prompt.starts_with("달걀찜의 영양 정보를 바탕으로"));
        assert!(prompt.contains("1) 건강 점수: NN/100"));
        assert!(prompt.contains("2) 이유:"));
        assert!(prompt.contains("3) 개선 팁:"));
    }

    #[test]
    fn test_system_prompt_names_the_tool() {
        assert!(SYSTEM_PROMPT.contains("get_food_info"));
    }
}
