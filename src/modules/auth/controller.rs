use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::{info, instrument};

use marquee_core::AppError;

use super::model::{LoginRequest, LoginResponse, MessageResponse, SessionResponse};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::modules::system::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Sign in and receive the session cookie.
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, `admin-session` cookie set", body = LoginResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let account = AuthService::authenticate(state.accounts.as_ref(), &dto)?;
    let (jar, payload) = state.codec.issue(jar, account.id, account.role)?;

    Ok((
        jar,
        Json(LoginResponse {
            user: account.into(),
            expires_at: payload.expires_at,
        }),
    ))
}

/// Clear the session cookie. Succeeds with or without a session.
#[utoipa::path(
    post,
    path = "/api/admin/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(payload) = state.codec.read(&jar).and_then(|token| state.codec.decode(&token)) {
        info!(subject_id = payload.subject_id, role = %payload.role, "Admin logged out");
    }

    (
        state.codec.evict(jar),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Describe the session the gate attached to this request.
#[utoipa::path(
    get,
    path = "/api/admin/auth/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Missing, malformed or expired session", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Authentication"
)]
#[instrument(
    skip_all,
    fields(subject_id = auth_user.subject_id(), role = %auth_user.role())
)]
pub async fn current_session(auth_user: AuthUser) -> Json<SessionResponse> {
    Json(auth_user.0.into())
}
