use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

pub async fn save_setting(connection: &Pool<Sqlite>, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO settings (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(connection)
    .await
    .with_context(|| format!("Failed to save setting '{}'", key))?;

    Ok(())
}

pub async fn delete_setting(connection: &Pool<Sqlite>, key: &str) -> Result<()> {
    sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(key)
        .execute(connection)
        .await
        .with_context(|| format!("Failed to delete setting '{}'", key))?;

    Ok(())
}
