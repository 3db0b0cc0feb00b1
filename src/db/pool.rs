use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// Checks that the database answers and the schema has been applied.
pub async fn schema_ready(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let tables = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM information_schema.tables
        WHERE table_schema = current_schema() AND table_name IN ('goals', 'progress')
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(tables == 2)
}
