use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Owned by `main`; handlers receive it through `AppState`, never a global.
pub async fn create_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
        .expect("Failed to create database pool")
}
