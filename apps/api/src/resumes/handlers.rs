//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::auth::{AdminUser, AuthUser};
use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeWithOwner};
use crate::resumes::repository::DUPLICATE_RESUME;
use crate::resumes::validation::{validate_submission, ResumeSubmission};
use crate::state::AppState;

const RESUME_NOT_FOUND: &str = "Resume not found for this user.";

#[derive(Debug, Serialize)]
pub struct ProfilePayload {
    pub profile: ResumeRow,
}

#[derive(Debug, Serialize)]
pub struct ProfilesPayload {
    pub count: usize,
    pub profiles: Vec<ResumeWithOwner>,
}

type ProfileResponse = (StatusCode, Json<Envelope<ProfilePayload>>);

/// Unwraps the JSON body, reporting malformed input as a 400 in the error envelope.
fn submission(body: Result<Json<ResumeSubmission>, JsonRejection>) -> Result<ResumeSubmission, AppError> {
    body.map(|Json(s)| s)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<ResumeSubmission>, JsonRejection>,
) -> Result<ProfileResponse, AppError> {
    let fields = validate_submission(submission(body)?)?;

    // Fast path only; the unique index on user_id is the real guard.
    if state.resumes.find_by_owner(user.id).await?.is_some() {
        return Err(AppError::Conflict(DUPLICATE_RESUME.to_string()));
    }

    let profile = state.resumes.create(user.id, &fields).await?;
    info!("Created resume {} for user {}", profile.id, user.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(
            "Resume created successfully.",
            ProfilePayload { profile },
        )),
    ))
}

/// GET /api/v1/resumes/user
pub async fn handle_get_own_resume(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<ProfileResponse, AppError> {
    let profile = state
        .resumes
        .find_by_owner(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            "Resume retrieved successfully.",
            ProfilePayload { profile },
        )),
    ))
}

/// PUT /api/v1/resumes/user
///
/// Full replacement: the required fields must be resubmitted every time, and
/// optional fields left out are cleared.
pub async fn handle_update_own_resume(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<ResumeSubmission>, JsonRejection>,
) -> Result<ProfileResponse, AppError> {
    let fields = validate_submission(submission(body)?)?;

    let existing = state
        .resumes
        .find_by_owner(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;

    let profile = state.resumes.update(&existing, &fields).await?;
    info!("Updated resume {} for user {}", profile.id, user.id);

    Ok((
        StatusCode::OK,
        Json(Envelope::new(
            "Resume updated successfully.",
            ProfilePayload { profile },
        )),
    ))
}

/// DELETE /api/v1/resumes/user
pub async fn handle_delete_own_resume(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Envelope<()>>, AppError> {
    let existing = state
        .resumes
        .find_by_owner(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESUME_NOT_FOUND.to_string()))?;

    state.resumes.destroy(&existing).await?;
    info!("Deleted resume {} for user {}", existing.id, user.id);

    Ok(Json(Envelope::message_only("Resume deleted successfully.")))
}

/// GET /api/v1/resumes
///
/// Admin-only listing of every resume with its owner's contact details.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Envelope<ProfilesPayload>>, AppError> {
    let profiles = state.resumes.find_all_with_owner().await?;
    if profiles.is_empty() {
        return Err(AppError::NotFound("No profiles found.".to_string()));
    }

    Ok(Json(Envelope::new(
        "Profiles retrieved successfully.",
        ProfilesPayload {
            count: profiles.len(),
            profiles,
        },
    )))
}
