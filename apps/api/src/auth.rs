//! Authenticated principal extractors.
//!
//! Authentication happens upstream: the gateway verifies the caller and
//! forwards `X-User-Id` and `X-User-Role`. Both are trusted as-is here.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Recruiter,
    Interviewer,
    Candidate,
}

impl Role {
    fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "recruiter" => Some(Role::Recruiter),
            "interviewer" => Some(Role::Interviewer),
            "candidate" => Some(Role::Candidate),
            _ => None,
        }
    }
}

/// The caller on whose behalf the request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    fn from_parts(parts: &Parts) -> Result<Self, AppError> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let role = match parts.headers.get(USER_ROLE_HEADER) {
            None => Role::Candidate,
            Some(v) => v
                .to_str()
                .ok()
                .and_then(Role::parse)
                .ok_or(AppError::Unauthorized)?,
        };

        Ok(AuthUser { id, role })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        AuthUser::from_parts(parts)
    }
}

/// An authenticated caller holding the admin role.
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_parts(parts)?;
        if !user.is_admin() {
            return Err(AppError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
