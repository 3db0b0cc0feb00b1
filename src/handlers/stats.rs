use axum::{extract::State, Json};

use crate::db;
use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::models::progress::StatsQuery;
use crate::services::stats::CompletionStats;
use crate::AppState;

/// GET /api/stats?goalId=... An unknown goal yields all-zero stats.
pub async fn get_stats(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<StatsQuery>,
) -> AppResult<Json<CompletionStats>> {
    let goal_id = query
        .goal_id
        .ok_or_else(|| AppError::BadRequest("goalId is required".into()))?;

    let records = db::progress::for_goal(&state.db, goal_id).await?;
    let stats = CompletionStats::from_records(&records);
    tracing::debug!(goal_id = %goal_id, total_days = stats.total_days, "Stats computed");

    Ok(Json(stats))
}
