use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqliteQueryResult};

pub async fn connect(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let connection = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("Failed to open settings database at {}", path.display()))?;

    create_settings(&connection).await?;

    Ok(connection)
}

pub async fn create_settings(
    connection: &sqlx::Pool<sqlx::Sqlite>,
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(connection)
    .await
}
