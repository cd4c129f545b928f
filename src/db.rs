use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

const SCHEMA: &str = include_str!("../migrations/001_create_tables.sql");

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(database_url, max_connections, "Connected to database");

    create_tables(&pool).await?;
    Ok(pool)
}

/// Creates the `employees` and `attendance` tables and their indexes if absent.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let statements = SCHEMA
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty());

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    #[actix_web::test]
    async fn create_tables_is_idempotent() {
        let pool = memory_pool().await;
        create_tables(&pool).await.expect("second run");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('employees', 'attendance') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["attendance", "employees"]);
    }

    #[actix_web::test]
    async fn init_db_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("hrms-lite-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("init.db");
        let _ = std::fs::remove_file(&path);

        let url = format!("sqlite://{}", path.display());
        let pool = init_db(&url, 1).await.expect("init db");
        pool.close().await;

        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }
}
