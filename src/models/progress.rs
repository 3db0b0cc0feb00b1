use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::de::blank_as_none;

/// One goal's completion status for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub date: NaiveDate,
    pub completed: bool,
    pub notes: Option<String>,
    /// Set only while `completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
}

/// POST /api/progress
///
/// `goalId` and `date` are required; they are optional here so a missing or
/// blank field produces a 400 with the standard error envelope.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProgressRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[validate(length(max = 5000, message = "Notes must be under 5000 characters"))]
    pub notes: Option<String>,
}

/// GET /api/progress query params. Date bounds are inclusive.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal_id: Option<Uuid>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<NaiveDate>,
}

/// GET /api/stats query params
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request_defaults_completed_to_false() {
        let json = r#"{"goalId":"6f1c1c5e-9a43-4c57-9f3e-1d2b8c7a0e11","date":"2024-01-04"}"#;
        let req: UpsertProgressRequest = serde_json::from_str(json).unwrap();
        assert!(!req.completed);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 1, 4));
        assert!(req.notes.is_none());
    }

    #[test]
    fn test_upsert_request_tolerates_missing_keys() {
        let req: UpsertProgressRequest = serde_json::from_str("{}").unwrap();
        assert!(req.goal_id.is_none());
        assert!(req.date.is_none());
    }

    #[test]
    fn test_upsert_request_blank_goal_is_missing() {
        let req: UpsertProgressRequest =
            serde_json::from_str(r#"{"goalId":"","date":"2024-01-01"}"#).unwrap();
        assert!(req.goal_id.is_none());
        assert!(req.date.is_some());
    }

    #[test]
    fn test_progress_record_serializes_camel_case() {
        let record = ProgressRecord {
            id: Uuid::new_v4(),
            goal_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            completed: false,
            notes: None,
            completed_at: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert!(json.get("goalId").is_some());
        assert!(json["completedAt"].is_null());
    }
}
