//! Session gate for the admin namespace.
//!
//! Every request under the admin prefix, other than login and logout, must
//! carry a valid `admin-session` cookie whose role the [`RoleMatrix`] admits
//! for the requested path:
//!
//! ```text
//! request ─► outside namespace / public path ──────────────► handler
//!        └─► cookie missing / malformed ───────────────────► 401
//!        └─► cookie expired ─────────────► evict cookie ───► 401
//!        └─► role not allowed for path ────────────────────► 403
//!        └─► allowed ─► attach x-user-id / x-user-role ────► handler
//! ```
//!
//! [`RoleMatrix`]: marquee_auth::RoleMatrix

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use marquee_auth::{SessionPayload, SessionState};
use marquee_core::AppError;

use crate::metrics::track_gate_decision;
use crate::state::AppState;

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
pub const USER_ROLE_HEADER: HeaderName = HeaderName::from_static("x-user-role");

const AUTHENTICATION_REQUIRED: &str = "Authentication required";
const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// How the gate disposed of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Bypassed,
    Forwarded,
    MissingSession,
    MalformedSession,
    ExpiredSession,
    InsufficientRole,
}

impl GateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateOutcome::Bypassed => "bypassed",
            GateOutcome::Forwarded => "forwarded",
            GateOutcome::MissingSession => "missing_session",
            GateOutcome::MalformedSession => "malformed_session",
            GateOutcome::ExpiredSession => "expired_session",
            GateOutcome::InsufficientRole => "insufficient_role",
        }
    }
}

pub async fn session_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    if !state.config.access.is_protected(&path) {
        track_gate_decision(GateOutcome::Bypassed);
        return next.run(req).await;
    }

    // Identity headers are only ever set by this gate.
    let headers = req.headers_mut();
    headers.remove(USER_ID_HEADER);
    headers.remove(USER_ROLE_HEADER);

    let jar = CookieJar::from_headers(req.headers());
    let state_of_session = match state.codec.read(&jar) {
        Some(token) => state.codec.inspect(&token),
        None => return reject(&path, GateOutcome::MissingSession, None),
    };

    let payload = match state_of_session {
        SessionState::Active(payload) => payload,
        SessionState::Malformed => return reject(&path, GateOutcome::MalformedSession, None),
        SessionState::Expired(payload) => {
            let jar = state.codec.evict(jar);
            let response = reject(&path, GateOutcome::ExpiredSession, Some(&payload));
            return (jar, response).into_response();
        }
    };

    let allowed_roles = match state.matrix.lookup(&path) {
        Some(requirement) => requirement.allowed_roles(),
        None => {
            warn!(
                path = %path,
                policy = %state.matrix.policy(),
                subject_id = payload.subject_id,
                role = %payload.role,
                "No role matrix entry for admin path, applying unlisted-path policy"
            );
            state.matrix.fallback()
        }
    };

    if !allowed_roles.contains(&payload.role) {
        return reject(&path, GateOutcome::InsufficientRole, Some(&payload));
    }

    debug!(
        path = %path,
        subject_id = payload.subject_id,
        role = %payload.role,
        "Admin request authorized"
    );
    track_gate_decision(GateOutcome::Forwarded);

    attach_identity(&mut req, payload);
    next.run(req).await
}

fn attach_identity(req: &mut Request, payload: SessionPayload) {
    let headers = req.headers_mut();
    headers.insert(USER_ID_HEADER, HeaderValue::from(payload.subject_id));
    headers.insert(
        USER_ROLE_HEADER,
        HeaderValue::from_static(payload.role.as_str()),
    );
    req.extensions_mut().insert(payload);
}

fn reject(path: &str, outcome: GateOutcome, payload: Option<&SessionPayload>) -> Response {
    match payload {
        Some(payload) => warn!(
            path = %path,
            reason = outcome.as_str(),
            subject_id = payload.subject_id,
            role = %payload.role,
            "Admin request rejected"
        ),
        None => warn!(path = %path, reason = outcome.as_str(), "Admin request rejected"),
    }
    track_gate_decision(outcome);

    let error = match outcome {
        GateOutcome::InsufficientRole => AppError::forbidden(INSUFFICIENT_PERMISSIONS),
        _ => AppError::unauthorized(AUTHENTICATION_REQUIRED),
    };
    error.into_response()
}
