use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::OwnerSummary;

/// A persisted resume profile. At most one row exists per `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub summary: String,
    pub headline: Option<String>,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub industry: Option<String>,
    pub availability: Option<String>,
    pub company: Option<String>,
    pub achievements: Option<String>,
    pub portfolio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A resume joined with the display attributes of its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeWithOwner {
    #[serde(flatten)]
    pub resume: ResumeRow,
    pub user: OwnerSummary,
}

/// Flat row shape produced by the resumes ⋈ users listing query.
#[derive(Debug, FromRow)]
pub struct ResumeOwnerRow {
    #[sqlx(flatten)]
    pub resume: ResumeRow,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<ResumeOwnerRow> for ResumeWithOwner {
    fn from(row: ResumeOwnerRow) -> Self {
        ResumeWithOwner {
            resume: row.resume,
            user: OwnerSummary {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                phone: row.phone,
            },
        }
    }
}
