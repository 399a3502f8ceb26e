use axum::{extract::FromRequestParts, http::request::Parts};

use marquee_auth::{Role, SessionPayload};
use marquee_core::AppError;

/// Identity of the caller, as attached by the session gate.
///
/// Handlers behind the gate take this instead of decoding the cookie again.
/// Extraction fails with 401 on routes the gate does not cover.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionPayload);

impl AuthUser {
    pub fn subject_id(&self) -> i64 {
        self.0.subject_id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionPayload>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
