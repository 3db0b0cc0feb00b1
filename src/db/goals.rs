use sqlx::PgPool;
use uuid::Uuid;

use crate::models::goal::{
    CreateGoalRequest, Goal, UpdateGoalRequest, DEFAULT_COLOR, DEFAULT_TARGET_DAYS,
};

/// All goals, newest first.
pub async fn list(db: &PgPool) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>("SELECT * FROM goals ORDER BY created_at DESC")
        .fetch_all(db)
        .await
}

pub async fn find(db: &PgPool, goal_id: Uuid) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1")
        .bind(goal_id)
        .fetch_optional(db)
        .await
}

pub async fn exists(db: &PgPool, goal_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM goals WHERE id = $1)")
        .bind(goal_id)
        .fetch_one(db)
        .await
}

pub async fn insert(db: &PgPool, body: &CreateGoalRequest) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (id, title, description, color, target_days)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.title)
    .bind(&body.description)
    .bind(body.color.as_deref().unwrap_or(DEFAULT_COLOR))
    .bind(body.target_days.unwrap_or(DEFAULT_TARGET_DAYS))
    .fetch_one(db)
    .await
}

/// Applies the fields present in `body`; an explicit `null` description
/// clears it. Returns `None` when the goal does not exist.
pub async fn update(
    db: &PgPool,
    goal_id: Uuid,
    body: &UpdateGoalRequest,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals SET
            title = COALESCE($2, title),
            description = CASE WHEN $6 THEN $3 ELSE description END,
            color = COALESCE($4, color),
            target_days = COALESCE($5, target_days),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(goal_id)
    .bind(&body.title)
    .bind(body.description_change().flatten())
    .bind(&body.color)
    .bind(body.target_days)
    .bind(body.description_change().is_some())
    .fetch_optional(db)
    .await
}

/// Deletes the goal and, through the foreign key, its progress records.
pub async fn delete(db: &PgPool, goal_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM goals WHERE id = $1")
        .bind(goal_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
