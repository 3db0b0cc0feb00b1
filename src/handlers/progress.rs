use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::models::progress::{ProgressQuery, ProgressRecord, UpsertProgressRequest};
use crate::AppState;

pub async fn list_progress(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ProgressQuery>,
) -> AppResult<Json<Vec<ProgressRecord>>> {
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(AppError::BadRequest(
                "startDate must not be after endDate".into(),
            ));
        }
    }

    let records = db::progress::list(&state.db, &query).await?;
    Ok(Json(records))
}

/// Creates the record for (goal, date) on first write and updates it in
/// place afterwards. Responds 201 on insert and 200 on update.
pub async fn upsert_progress(
    State(state): State<AppState>,
    AppJson(body): AppJson<UpsertProgressRequest>,
) -> AppResult<(StatusCode, Json<ProgressRecord>)> {
    let (Some(goal_id), Some(date)) = (body.goal_id, body.date) else {
        return Err(AppError::BadRequest("goalId and date are required".into()));
    };
    body.validate()?;

    if !db::goals::exists(&state.db, goal_id).await? {
        return Err(AppError::NotFound("Goal not found".into()));
    }

    let notes = body.notes.as_deref().filter(|n| !n.is_empty());
    let upserted = db::progress::upsert(&state.db, goal_id, date, body.completed, notes).await?;

    tracing::info!(
        goal_id = %goal_id,
        date = %date,
        completed = body.completed,
        inserted = upserted.inserted,
        "Progress recorded"
    );

    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(upserted.record)))
}
