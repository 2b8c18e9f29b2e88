use std::path::PathBuf;

use sqlx::{ConnectOptions, Connection, sqlite::SqliteConnectOptions};
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionRecord, ports::NutritionRepository, value_objects::FoodNameQuery},
};

/// Contains-match on the space-stripped name, prefix matches first.
/// The third bucket cannot be reached under the WHERE filter but keeps the
/// ordering total.
const FIND_BY_NAME_SQL: &str = "SELECT * FROM FOOD_NUTRITION
WHERE instr(REPLACE(food_name, ' ', ''), ?) > 0
ORDER BY
    CASE
        WHEN instr(REPLACE(food_name, ' ', ''), ?) = 1 THEN 1
        WHEN instr(REPLACE(food_name, ' ', ''), ?) > 0 THEN 2
        ELSE 3
    END,
    rowid";

/// Read-only view of the `FOOD_NUTRITION` table in a SQLite file.
///
/// Each lookup opens its own connection and closes it before returning.
#[derive(Debug, Clone)]
pub struct SqliteNutritionRepository {
    pub path: PathBuf,
}

impl SqliteNutritionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NutritionRepository for SqliteNutritionRepository {
    async fn find_by_name(&self, query: FoodNameQuery) -> Result<Vec<NutritionRecord>, CoreError> {
        let mut connection = SqliteConnectOptions::new()
            .filename(&self.path)
            .read_only(true)
            .connect()
            .await
            .map_err(|e| {
                error!("Failed to open nutrition database {:?}: {}", self.path, e);
                CoreError::StorageError(e.to_string())
            })?;

        let rows = sqlx::query(FIND_BY_NAME_SQL)
            .bind(query.as_str())
            .bind(query.as_str())
            .bind(query.as_str())
            .fetch_all(&mut connection)
            .await;

        if let Err(e) = connection.close().await {
            warn!("Failed to close nutrition database connection: {}", e);
        }

        let rows = rows.map_err(|e| {
            error!("Failed to query nutrition records for {:?}: {}", query.as_str(), e);
            CoreError::StorageError(e.to_string())
        })?;

        rows.iter()
            .map(NutritionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!("Failed to decode nutrition record: {}", e);
                CoreError::StorageError(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use sqlx::SqliteConnection;
    use tempfile::TempDir;

    use super::*;

    async fn create_database(path: &Path, rows: &[(&str, &str, Option<f64>)]) {
        let mut connection: SqliteConnection = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();

        sqlx::query(
            "CREATE TABLE FOOD_NUTRITION (
                food_name TEXT,
                food_origin_name TEXT,
                energy_kcal REAL,
                carbohydrates_g REAL,
                protein_g TEXT,
                fat_g REAL,
                sugars_g REAL,
                sodium_mg INTEGER,
                serving_size TEXT
            )",
        )
        .execute(&mut connection)
        .await
        .unwrap();

        for (food_name, origin, energy) in rows {
            sqlx::query(
                "INSERT INTO FOOD_NUTRITION
                    (food_name, food_origin_name, energy_kcal, protein_g, sodium_mg, serving_size)
                 VALUES (?, ?, ?, '7.5', 830, NULL)",
            )
            .bind(*food_name)
            .bind(*origin)
            .bind(*energy)
            .execute(&mut connection)
            .await
            .unwrap();
        }

        connection.close().await.unwrap();
    }

    async fn repository(rows: &[(&str, &str, Option<f64>)]) -> (TempDir, SqliteNutritionRepository) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("food.db");
        create_database(&path, rows).await;
        (dir, SqliteNutritionRepository::new(path))
    }

    fn names(records: &[NutritionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.food_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_prefix_matches_rank_first() {
        let (_dir, repository) = repository(&[
            ("순두부 김치찌개", "가정식", Some(180.0)),
            ("김치찌개", "가정식", Some(200.0)),
            ("돼지고기 김치 찌개", "외식 음식", None),
            ("김치찌개 라면", "가공식품", Some(500.0)),
            ("된장찌개", "가정식", Some(150.0)),
        ])
        .await;

        let records = repository
            .find_by_name(FoodNameQuery::new("김치찌개"))
            .await
            .unwrap();

        assert_eq!(
            names(&records),
            vec!["김치찌개", "김치찌개 라면", "순두부 김치찌개", "돼지고기 김치 찌개"]
        );
    }

    #[tokio::test]
    async fn test_spaces_are_ignored_on_both_sides() {
        let (_dir, repository) = repository(&[("비빔 밥", "가정식", Some(550.0))]).await;

        let spaced = repository.find_by_name(FoodNameQuery::new("비 빔밥")).await.unwrap();
        let compact = repository.find_by_name(FoodNameQuery::new("비빔밥")).await.unwrap();

        assert_eq!(names(&spaced), vec!["비빔 밥"]);
        assert_eq!(spaced, compact);
    }

    #[tokio::test]
    async fn test_match_is_case_sensitive_and_literal() {
        let (_dir, repository) = repository(&[
            ("Kimchi Fried Rice", "외식 음식", Some(620.0)),
            ("떡볶이_분식", "외식 음식", Some(300.0)),
            ("떡볶이", "가정식", Some(280.0)),
        ])
        .await;

        assert!(repository
            .find_by_name(FoodNameQuery::new("kimchi"))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            names(&repository.find_by_name(FoodNameQuery::new("Kimchi")).await.unwrap()),
            vec!["Kimchi Fried Rice"]
        );
        assert_eq!(
            names(&repository.find_by_name(FoodNameQuery::new("이_")).await.unwrap()),
            vec!["떡볶이_분식"]
        );
        assert!(repository
            .find_by_name(FoodNameQuery::new("떡%"))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_row_decoding() {
        let (_dir, repository) = repository(&[("잡채", "외식 음식", Some(290.5))]).await;

        let records = repository.find_by_name(FoodNameQuery::new("잡채")).await.unwrap();
        let record = &records[0];

        assert_eq!(record.food_origin_category, "외식 음식");
        assert!(record.is_dine_out());
        assert_eq!(record.energy_kcal, Some(290.5));
        assert_eq!(record.protein_g, Some(7.5));
        assert_eq!(record.carbohydrates_g, None);
        assert_eq!(record.extra.get("sodium_mg").map(String::as_str), Some("830"));
        assert!(!record.extra.contains_key("serving_size"));
    }

    #[tokio::test]
    async fn test_missing_database_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = SqliteNutritionRepository::new(dir.path().join("missing.db"));

        let result = repository.find_by_name(FoodNameQuery::new("김치")).await;

        assert!(matches!(result, Err(CoreError::StorageError(_))));
        assert!(!dir.path().join("missing.db").exists());
    }

    #[tokio::test]
    async fn test_missing_table_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        let connection: SqliteConnection = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        connection.close().await.unwrap();

        let result = SqliteNutritionRepository::new(path)
            .find_by_name(FoodNameQuery::new("김치"))
            .await;

        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }
}
