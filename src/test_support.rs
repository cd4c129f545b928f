use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::db::create_tables;

/// In-memory database with the production schema.
///
/// Every SQLite `:memory:` connection is its own database, so the pool is
/// pinned to one connection that never expires.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");

    create_tables(&pool).await.expect("create tables");
    pool
}

/// Builds the full route table over `$pool` for `actix_web::test` calls.
macro_rules! test_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($pool.clone()))
                .configure(crate::routes::configure),
        )
        .await
    };
}

pub(crate) use test_app;
