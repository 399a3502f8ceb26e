//! Decoded session types.
//!
//! - [`SessionClaims`]: the signed wire form stored in the session cookie
//! - [`SessionPayload`]: the validated identity and expiry record
//! - [`SessionState`]: the outcome of inspecting a cookie value

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Claims embedded in the session token.
///
/// `sub` is the decimal subject id; `iat` and `exp` are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// Converts wire claims into a payload, or `None` when they break the
    /// payload invariants.
    pub fn into_payload(self) -> Option<SessionPayload> {
        let subject_id = self.sub.parse::<i64>().ok()?;
        let issued_at = DateTime::from_timestamp(self.iat, 0)?;
        let expires_at = DateTime::from_timestamp(self.exp, 0)?;

        if expires_at <= issued_at {
            return None;
        }

        Some(SessionPayload {
            subject_id,
            role: self.role,
            issued_at,
            expires_at,
        })
    }
}

/// Identity and lifetime of an admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub subject_id: i64,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionPayload {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    pub fn claims(&self) -> SessionClaims {
        SessionClaims {
            sub: self.subject_id.to_string(),
            role: self.role,
            iat: self.issued_at.timestamp(),
            exp: self.expires_at.timestamp(),
        }
    }
}

/// Result of inspecting a session cookie value. Inspection never mutates
/// anything; evicting an expired cookie is a separate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Active(SessionPayload),
    /// Well-formed and correctly signed, but past `expires_at`.
    Expired(SessionPayload),
    /// Unsigned, tampered, truncated or otherwise unusable.
    Malformed,
}

impl SessionState {
    pub fn active(self) -> Option<SessionPayload> {
        match self {
            SessionState::Active(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, SessionState::Expired(_))
    }
}
