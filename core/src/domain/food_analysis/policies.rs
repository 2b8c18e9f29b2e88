/// Classifier confidence (0-100) below which a photo is not analysed.
pub const CONFIDENCE_THRESHOLD: f64 = 40.0;

/// Label shown when the classifier could not name the dish.
pub const UNCLASSIFIED_LABEL: &str = "분류 불가";

/// Placeholder score for unclassified photos; 0 is reserved for "no score found".
pub const UNCLASSIFIED_SCORE: u32 = 1;

/// Classifier class name -> `FOOD_NUTRITION.food_name`. `None` marks classes
/// the table already names the same way.
const FOOD_ALIASES: &[(&str, Option<&str>)] = &[
    ("간장게장", Some("게장_간장")),
    ("감자채볶음", Some("감자볶음")),
    ("계란국", Some("달걀국")),
    ("계란말이", Some("달걀말이")),
    ("계란찜", Some("달걀찜")),
    ("계란후라이", Some("달걀후라이")),
    ("고추장진미채볶음", Some("오징어볶음")),
    ("곰탕_설렁탕", Some("설렁탕")),
    ("꽈리고추무침", Some("오이지무침_고추")),
    ("닭계장", Some("닭볶음탕")),
    ("도라지무침", Some("도라지생채")),
    ("떡국_만두국", Some("떡국_소고기")),
    ("떡꼬치", Some("떡강정")),
    ("북엇국", Some("북어국")),
    ("새우볶음밥", Some("볶음밥_새우")),
    ("소세지볶음", Some("소시지케첩볶음")),
    ("시래기국", Some("된장국_시래기")),
    ("양념게장", Some("게장_양념")),
    ("열무국수", Some("국수_열무김치")),
    ("젓갈", Some("양념오징어젓")),
    ("편육", Some("수육")),
    ("한과", Some("유과")),
    ("과메기", None),
    ("산낙지", None),
    ("수정과", None),
];

pub fn is_classifiable(confidence: f64) -> bool {
    confidence >= CONFIDENCE_THRESHOLD
}

/// Name used for the nutrition lookup and the agent prompt.
pub fn resolve_food_alias(classifier_label: &str) -> &str {
    FOOD_ALIASES
        .iter()
        .find(|(label, _)| *label == classifier_label)
        .and_then(|(_, alias)| *alias)
        .unwrap_or(classifier_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_boundary_is_half_open() {
        assert!(!is_classifiable(39.9999));
        assert!(is_classifiable(40.0));
        assert!(is_classifiable(99.5));
        assert!(!is_classifiable(0.0));
    }

    #[test]
    fn test_alias_rewrites_known_labels() {
        assert_eq!(resolve_food_alias("간장게장"), "게장_간장");
        assert_eq!(resolve_food_alias("계란찜"), "달걀찜");
        assert_eq!(resolve_food_alias("한과"), "유과");
    }

    #[test]
    fn test_alias_keeps_unlisted_and_identity_labels() {
        assert_eq!(resolve_food_alias("비빔밥"), "비빔밥");
        assert_eq!(resolve_food_alias("과메기"), "과메기");
        assert_eq!(resolve_food_alias(""), "");
    }
}
