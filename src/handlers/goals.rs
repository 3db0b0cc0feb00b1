use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::models::goal::{CreateGoalRequest, Goal, UpdateGoalRequest};
use crate::services::stats::CompletionStats;
use crate::AppState;

fn goal_not_found() -> AppError {
    AppError::NotFound("Goal not found".into())
}

pub async fn list_goals(State(state): State<AppState>) -> AppResult<Json<Vec<Goal>>> {
    let goals = db::goals::list(&state.db).await?;
    Ok(Json(goals))
}

pub async fn get_goal(
    State(state): State<AppState>,
    AppPath(goal_id): AppPath<Uuid>,
) -> AppResult<Json<Goal>> {
    let goal = db::goals::find(&state.db, goal_id)
        .await?
        .ok_or_else(goal_not_found)?;

    Ok(Json(goal))
}

pub async fn create_goal(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateGoalRequest>,
) -> AppResult<(StatusCode, Json<Goal>)> {
    body.validate()?;

    let goal = db::goals::insert(&state.db, &body).await?;
    tracing::info!(goal_id = %goal.id, title = %goal.title, "Goal created");

    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn update_goal(
    State(state): State<AppState>,
    AppPath(goal_id): AppPath<Uuid>,
    AppJson(body): AppJson<UpdateGoalRequest>,
) -> AppResult<Json<Goal>> {
    body.validate()?;
    body.validate_description().map_err(AppError::Validation)?;

    let goal = db::goals::update(&state.db, goal_id, &body)
        .await?
        .ok_or_else(goal_not_found)?;
    tracing::info!(goal_id = %goal.id, "Goal updated");

    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    AppPath(goal_id): AppPath<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    if !db::goals::delete(&state.db, goal_id).await? {
        return Err(goal_not_found());
    }
    tracing::info!(goal_id = %goal_id, "Goal deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn get_goal_stats(
    State(state): State<AppState>,
    AppPath(goal_id): AppPath<Uuid>,
) -> AppResult<Json<CompletionStats>> {
    if !db::goals::exists(&state.db, goal_id).await? {
        return Err(goal_not_found());
    }

    let records = db::progress::for_goal(&state.db, goal_id).await?;
    Ok(Json(CompletionStats::from_records(&records)))
}
