//! Completion statistics for a single goal.
//!
//! Streaks are measured over *recorded* days: records are ordered by date and
//! two records are consecutive when they are adjacent in that order, even if
//! calendar days without a record lie between them. A missing day therefore
//! never breaks a streak; only a record with `completed = false` does.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::progress::ProgressRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub total_days: u32,
    pub completed_days: u32,
    /// Integer percentage, rounded half-up.
    pub completion_rate: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl CompletionStats {
    /// Computes stats over every record of one goal. The caller is
    /// responsible for supplying records of a single goal only.
    pub fn from_records(records: &[ProgressRecord]) -> Self {
        Self::from_days(records.iter().map(|r| (r.date, r.completed)))
    }

    /// Computes stats from `(date, completed)` pairs in any order.
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, bool)>,
    {
        let mut days: Vec<(NaiveDate, bool)> = days.into_iter().collect();
        // Most recent first; the full tuple ordering keeps the result
        // independent of input order.
        days.sort_unstable_by(|a, b| b.cmp(a));

        let total_days = u32::try_from(days.len()).unwrap_or(u32::MAX);
        let mut completed_days = 0u32;
        let mut current_streak = 0u32;
        let mut longest_streak = 0u32;
        let mut run = 0u32;
        let mut unbroken = true;

        for (_, completed) in &days {
            if *completed {
                completed_days = completed_days.saturating_add(1);
                run = run.saturating_add(1);
                if unbroken {
                    current_streak = run;
                }
                longest_streak = longest_streak.max(run);
            } else {
                unbroken = false;
                run = 0;
            }
        }

        Self {
            total_days,
            completed_days,
            completion_rate: completion_rate(completed_days, total_days),
            current_streak,
            longest_streak,
        }
    }
}

/// `round(completed / total * 100)` with half-up rounding, in integer math.
fn completion_rate(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (completed, total) = (u64::from(completed), u64::from(total));
    ((completed * 200 + total) / (total * 2)) as u32
}
