use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::de::double_option;

pub const DEFAULT_COLOR: &str = "#3b82f6";
pub const DEFAULT_TARGET_DAYS: i32 = 30;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
const TITLE_MESSAGE: &str = "Title must be 1-200 characters";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub color: String,
    pub target_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST /api/goals
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom = "validate_not_blank"
    )]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be under 2000 characters"))]
    pub description: Option<String>,

    /// Hex color code. Default: "#3b82f6"
    #[validate(custom = "validate_hex_color")]
    pub color: Option<String>,

    /// Default: 30
    #[validate(range(min = 1, max = 3650, message = "targetDays must be 1-3650"))]
    pub target_days: Option<i32>,
}

/// PUT /api/goals/{id}. Partial; `id` and `createdAt` in the body are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom = "validate_not_blank"
    )]
    pub title: Option<String>,

    /// Absent leaves the description alone; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[validate(custom = "validate_hex_color")]
    pub color: Option<String>,

    #[validate(range(min = 1, max = 3650, message = "targetDays must be 1-3650"))]
    pub target_days: Option<i32>,
}

impl UpdateGoalRequest {
    pub fn validate_description(&self) -> Result<(), String> {
        match &self.description {
            Some(Some(text)) if text.chars().count() > MAX_DESCRIPTION_CHARS => {
                Err("Description must be under 2000 characters".into())
            }
            _ => Ok(()),
        }
    }

    /// The new description when the request sets or clears it.
    pub fn description_change(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(|d| d.as_deref())
    }
}

fn validate_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(TITLE_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a #rrggbb hex code".into());
        Err(err)
    }
}
