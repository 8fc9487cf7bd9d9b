//! Resume persistence: a trait seam with a PostgreSQL backend.
//!
//! `AppState` holds an `Arc<dyn ResumeRepository>`; handlers never issue SQL
//! directly. The one-resume-per-user rule is enforced by the `resumes_user_id_key`
//! unique index, and a violation surfaces as `AppError::Conflict`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeOwnerRow, ResumeRow, ResumeWithOwner};
use crate::resumes::validation::ResumeFields;

pub const DUPLICATE_RESUME: &str = "Resume already exists for this user.";

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<ResumeRow>, AppError>;

    async fn create(&self, user_id: Uuid, fields: &ResumeFields) -> Result<ResumeRow, AppError>;

    /// Replaces every mutable column of `existing` with `fields`.
    async fn update(&self, existing: &ResumeRow, fields: &ResumeFields)
        -> Result<ResumeRow, AppError>;

    async fn destroy(&self, existing: &ResumeRow) -> Result<(), AppError>;

    async fn find_all_with_owner(&self) -> Result<Vec<ResumeWithOwner>, AppError>;
}

#[derive(Clone)]
pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps constraint violations raised on INSERT to their domain meaning.
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Conflict(DUPLICATE_RESUME.to_string());
        }
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound("User not found".to_string());
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create(&self, user_id: Uuid, fields: &ResumeFields) -> Result<ResumeRow, AppError> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (user_id, title, summary, headline, skills, experience, education,
                 industry, availability, company, achievements, portfolio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&fields.title)
        .bind(&fields.summary)
        .bind(&fields.headline)
        .bind(&fields.skills)
        .bind(&fields.experience)
        .bind(&fields.education)
        .bind(&fields.industry)
        .bind(&fields.availability)
        .bind(&fields.company)
        .bind(&fields.achievements)
        .bind(&fields.portfolio)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn update(
        &self,
        existing: &ResumeRow,
        fields: &ResumeFields,
    ) -> Result<ResumeRow, AppError> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes SET
                title = $2, summary = $3, headline = $4, skills = $5,
                experience = $6, education = $7, industry = $8,
                availability = $9, company = $10, achievements = $11,
                portfolio = $12, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(existing.id)
        .bind(&fields.title)
        .bind(&fields.summary)
        .bind(&fields.headline)
        .bind(&fields.skills)
        .bind(&fields.experience)
        .bind(&fields.education)
        .bind(&fields.industry)
        .bind(&fields.availability)
        .bind(&fields.company)
        .bind(&fields.achievements)
        .bind(&fields.portfolio)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found for this user.".to_string()))
    }

    async fn destroy(&self, existing: &ResumeRow) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(existing.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Resume not found for this user.".to_string(),
            ));
        }
        Ok(())
    }

    async fn find_all_with_owner(&self) -> Result<Vec<ResumeWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, ResumeOwnerRow>(
            r#"
            SELECT r.*, u.first_name, u.last_name, u.email, u.phone
            FROM resumes r
            JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ResumeWithOwner::from).collect())
    }
}
