use sqlx::{Column, Row, TypeInfo, ValueRef, sqlite::SqliteRow};

use crate::domain::nutrition::entities::NutritionRecord;

enum Cell {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Real(value) => Some(*value),
            Cell::Text(value) => value.trim().parse().ok(),
        }
    }

    fn into_string(self) -> String {
        match self {
            Cell::Integer(value) => value.to_string(),
            Cell::Real(value) => value.to_string(),
            Cell::Text(value) => value,
        }
    }
}

/// Reads one cell by its stored type. NULL and BLOB cells yield `None`.
fn read_cell(row: &SqliteRow, index: usize) -> Result<Option<Cell>, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(None);
    }

    let type_name = raw.type_info().name().to_ascii_uppercase();
    let cell = match type_name.as_str() {
        "INTEGER" => Some(Cell::Integer(row.try_get::<i64, _>(index)?)),
        "REAL" => Some(Cell::Real(row.try_get::<f64, _>(index)?)),
        "TEXT" => Some(Cell::Text(row.try_get::<String, _>(index)?)),
        _ => None,
    };

    Ok(cell)
}

impl TryFrom<&SqliteRow> for NutritionRecord {
    type Error = sqlx::Error;

    fn try_from(row: &SqliteRow) -> Result<Self, Self::Error> {
        let mut record = NutritionRecord::default();

        for (index, column) in row.columns().iter().enumerate() {
            let Some(cell) = read_cell(row, index)? else {
                continue;
            };

            match column.name().to_ascii_lowercase().as_str() {
                "food_name" => record.food_name = cell.into_string(),
                "food_origin_name" => record.food_origin_category = cell.into_string(),
                "energy_kcal" => record.energy_kcal = cell.as_f64(),
                "carbohydrates_g" => record.carbohydrates_g = cell.as_f64(),
                "protein_g" => record.protein_g = cell.as_f64(),
                "fat_g" => record.fat_g = cell.as_f64(),
                "sugars_g" => record.sugars_g = cell.as_f64(),
                _ => {
                    record
                        .extra
                        .insert(column.name().to_string(), cell.into_string());
                }
            }
        }

        Ok(record)
    }
}
