use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::progress::{ProgressQuery, ProgressRecord};

#[derive(Debug, FromRow)]
pub struct UpsertedProgress {
    #[sqlx(flatten)]
    pub record: ProgressRecord,
    /// True when the row was inserted, false when an existing row was updated.
    pub inserted: bool,
}

/// Progress records matching the optional filters, most recent date first.
pub async fn list(db: &PgPool, filter: &ProgressQuery) -> Result<Vec<ProgressRecord>, sqlx::Error> {
    sqlx::query_as::<_, ProgressRecord>(
        r#"
        SELECT * FROM progress
        WHERE ($1::uuid IS NULL OR goal_id = $1)
          AND ($2::date IS NULL OR date >= $2)
          AND ($3::date IS NULL OR date <= $3)
        ORDER BY date DESC
        "#,
    )
    .bind(filter.goal_id)
    .bind(filter.start_date)
    .bind(filter.end_date)
    .fetch_all(db)
    .await
}

/// Every record of one goal.
pub async fn for_goal(db: &PgPool, goal_id: Uuid) -> Result<Vec<ProgressRecord>, sqlx::Error> {
    let filter = ProgressQuery {
        goal_id: Some(goal_id),
        ..Default::default()
    };
    list(db, &filter).await
}

/// Inserts the record for `(goal_id, date)` or updates it in place.
///
/// `completed_at` is stamped with the current time while completed and
/// cleared otherwise; `notes` is replaced on every write.
pub async fn upsert(
    db: &PgPool,
    goal_id: Uuid,
    date: NaiveDate,
    completed: bool,
    notes: Option<&str>,
) -> Result<UpsertedProgress, sqlx::Error> {
    sqlx::query_as::<_, UpsertedProgress>(
        r#"
        INSERT INTO progress (id, goal_id, date, completed, notes, completed_at)
        VALUES ($1, $2, $3, $4, $5, CASE WHEN $4 THEN NOW() ELSE NULL END)
        ON CONFLICT (goal_id, date) DO UPDATE SET
            completed = EXCLUDED.completed,
            notes = EXCLUDED.notes,
            completed_at = EXCLUDED.completed_at
        RETURNING *, (xmax = 0) AS inserted
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(goal_id)
    .bind(date)
    .bind(completed)
    .bind(notes)
    .fetch_one(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::goals;
    use crate::db::test_support::{new_goal, test_pool};

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[tokio::test]
    async fn test_upsert_updates_in_place() {
        let Some(db) = test_pool().await else { return };
        let goal = goals::insert(&db, &new_goal("Journal")).await.unwrap();

        let first = upsert(&db, goal.id, jan(4), true, Some("felt good")).await.unwrap();
        assert!(first.inserted);
        assert!(first.record.completed);
        assert!(first.record.completed_at.is_some());
        assert_eq!(first.record.notes.as_deref(), Some("felt good"));

        let second = upsert(&db, goal.id, jan(4), false, None).await.unwrap();
        assert!(!second.inserted);
        assert_eq!(second.record.id, first.record.id);
        assert!(!second.record.completed);
        assert!(second.record.completed_at.is_none());
        assert!(second.record.notes.is_none());

        let records = for_goal(&db, goal.id).await.unwrap();
        assert_eq!(records.len(), 1);

        goals::delete(&db, goal.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_bounds_are_inclusive_and_newest_first() {
        let Some(db) = test_pool().await else { return };
        let goal = goals::insert(&db, &new_goal("Walk")).await.unwrap();
        for day in 1..=5 {
            upsert(&db, goal.id, jan(day), day % 2 == 1, None).await.unwrap();
        }

        let filter = ProgressQuery {
            goal_id: Some(goal.id),
            start_date: Some(jan(2)),
            end_date: Some(jan(4)),
        };
        let records = list(&db, &filter).await.unwrap();
        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![jan(4), jan(3), jan(2)]);

        let from_third = ProgressQuery {
            goal_id: Some(goal.id),
            start_date: Some(jan(3)),
            end_date: None,
        };
        assert_eq!(list(&db, &from_third).await.unwrap().len(), 3);

        goals::delete(&db, goal.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_for_goal_only_returns_that_goal() {
        let Some(db) = test_pool().await else { return };
        let a = goals::insert(&db, &new_goal("a")).await.unwrap();
        let b = goals::insert(&db, &new_goal("b")).await.unwrap();
        upsert(&db, a.id, jan(1), true, None).await.unwrap();
        upsert(&db, b.id, jan(1), true, None).await.unwrap();
        upsert(&db, b.id, jan(2), false, None).await.unwrap();

        let records = for_goal(&db, a.id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records.iter().all(|r| r.goal_id == a.id));

        goals::delete(&db, a.id).await.unwrap();
        goals::delete(&db, b.id).await.unwrap();
    }
}
