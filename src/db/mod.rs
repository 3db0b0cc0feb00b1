pub mod goals;
pub mod pool;
pub mod progress;

pub use pool::create_pool;

/// Database-backed tests run only when `TEST_DATABASE_URL` points at a
/// scratch Postgres; otherwise they return early.
#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;

    use crate::models::goal::CreateGoalRequest;

    pub async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("TEST_DATABASE_URL is not reachable");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations failed");
        Some(pool)
    }

    pub fn new_goal(title: &str) -> CreateGoalRequest {
        CreateGoalRequest {
            title: title.into(),
            description: None,
            color: None,
            target_days: None,
        }
    }
}
