/// A food name normalised for matching: every space removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodNameQuery(String);

impl FoodNameQuery {
    pub fn new(food_name: &str) -> Self {
        Self(strip_spaces(food_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FoodNameQuery {
    fn from(food_name: &str) -> Self {
        Self::new(food_name)
    }
}

pub fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_strips_every_space() {
        assert_eq!(FoodNameQuery::new(" 비빔 밥 ").as_str(), "비빔밥");
        assert_eq!(FoodNameQuery::new("비빔밥"), FoodNameQuery::from("비 빔 밥"));
    }

    #[test]
    fn test_query_keeps_other_whitespace_and_case() {
        assert_eq!(FoodNameQuery::new("Kimchi\tJjigae").as_str(), "Kimchi\tJjigae");
    }
}
