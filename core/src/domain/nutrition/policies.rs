use crate::domain::nutrition::entities::NutritionRecord;

/// Picks the record shown for a food name out of its ranked match list:
/// the first dine-out entry if any, otherwise the best-ranked one.
pub fn select_preferred_record(records: Vec<NutritionRecord>) -> Option<NutritionRecord> {
    let dine_out = records.iter().position(NutritionRecord::is_dine_out);

    records.into_iter().nth(dine_out.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, origin: &str) -> NutritionRecord {
        NutritionRecord::new(name, origin)
    }

    #[test]
    fn test_empty_match_list_is_not_found() {
        assert_eq!(select_preferred_record(vec![]), None);
    }

    #[test]
    fn test_dine_out_wins_over_higher_rank() {
        let records = vec![
            record("김치찌개", "가정식"),
            record("돼지고기김치찌개", "외식 음식"),
            record("참치김치찌개", "외식 음식"),
        ];

        let selected = select_preferred_record(records).unwrap();
        assert_eq!(selected.food_name, "돼지고기김치찌개");
    }

    #[test]
    fn test_first_record_without_dine_out() {
        let records = vec![record("김치찌개", "가정식"), record("참치김치찌개", "")];

        let selected = select_preferred_record(records).unwrap();
        assert_eq!(selected.food_name, "김치찌개");
    }

    #[test]
    fn test_marker_requires_trailing_space() {
        let records = vec![record("김치찌개", "가정식"), record("참치김치찌개", "외식")];

        let selected = select_preferred_record(records).unwrap();
        assert_eq!(selected.food_name, "김치찌개");
    }
}
