use anyhow::{Context, Result};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

pub fn parse_string_from_row(row: &SqliteRow, column: &str) -> Result<String> {
    row.try_get::<String, _>(column)
        .with_context(|| format!("Failed to parse String from column '{}'", column))
}

pub async fn load_setting(connection: &Pool<Sqlite>, key: &str) -> Result<Option<String>> {
    let row = sqlx::query(
        r#"
        SELECT value FROM settings
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(connection)
    .await
    .with_context(|| format!("Failed to load setting '{}'", key))?;

    row.map(|row| parse_string_from_row(&row, "value"))
        .transpose()
}
