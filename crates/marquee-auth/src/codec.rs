//! Session codec.
//!
//! Turns a subject id and role into a signed token stored in the
//! `admin-session` cookie, and turns that cookie back into a
//! [`SessionPayload`].
//!
//! Reading and evicting are separate operations: [`SessionCodec::inspect`]
//! only reports what the token holds, and [`SessionCodec::evict`] is the
//! explicit mutation that clears the cookie.
//!
//! # Example
//!
//! ```ignore
//! use marquee_auth::{Role, SessionCodec};
//! use marquee_config::SessionConfig;
//!
//! let codec = SessionCodec::new(&SessionConfig::from_env());
//! let (jar, payload) = codec.issue(jar, 42, Role::Editor)?;
//!
//! match codec.inspect(&token) {
//!     SessionState::Active(payload) => { /* forward */ }
//!     SessionState::Expired(_) => { let jar = codec.evict(jar); /* 401 */ }
//!     SessionState::Malformed => { /* 401 */ }
//! }
//! ```

use std::fmt;

use anyhow::anyhow;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use marquee_config::SessionConfig;
use marquee_core::AppError;

use crate::role::Role;
use crate::session::{SessionClaims, SessionPayload, SessionState};

/// A freshly encoded session: the cookie value plus what it encodes.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub value: String,
    pub payload: SessionPayload,
}

pub struct SessionCodec {
    cookie_name: String,
    secure_cookie: bool,
    ttl: TimeDelta,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionCodec {
    pub fn new(config: &SessionConfig) -> Self {
        // Expiry is checked against the caller's clock in `inspect_at`, so the
        // library's own wall-clock check stays off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            cookie_name: config.cookie_name.clone(),
            secure_cookie: config.secure_cookie,
            ttl: TimeDelta::seconds(config.ttl_seconds),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Encodes a session issued now.
    pub fn encode(&self, subject_id: i64, role: Role) -> Result<SessionToken, AppError> {
        self.encode_at(subject_id, role, Utc::now())
    }

    /// Encodes a session issued at `now`. Timestamps are truncated to whole
    /// seconds so the returned payload equals what decoding yields.
    pub fn encode_at(
        &self,
        subject_id: i64,
        role: Role,
        now: DateTime<Utc>,
    ) -> Result<SessionToken, AppError> {
        let issued_at = now.trunc_subsecs(0);
        let payload = SessionPayload {
            subject_id,
            role,
            issued_at,
            expires_at: issued_at + self.ttl,
        };

        let value = encode(
            &Header::new(Algorithm::HS256),
            &payload.claims(),
            &self.encoding_key,
        )
        .map_err(|e| AppError::internal(anyhow!("Failed to encode session: {e}")))?;

        Ok(SessionToken { value, payload })
    }

    pub fn inspect(&self, token: &str) -> SessionState {
        self.inspect_at(token, Utc::now())
    }

    /// Classifies a cookie value as active, expired or malformed relative to `now`.
    pub fn inspect_at(&self, token: &str, now: DateTime<Utc>) -> SessionState {
        let claims = match decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(err) => {
                tracing::debug!(error = %err, "Session token failed verification");
                return SessionState::Malformed;
            }
        };

        match claims.into_payload() {
            Some(payload) if payload.is_expired_at(now) => SessionState::Expired(payload),
            Some(payload) => SessionState::Active(payload),
            None => SessionState::Malformed,
        }
    }

    /// Active payload for `token`, or `None` when it is missing, malformed or expired.
    pub fn decode(&self, token: &str) -> Option<SessionPayload> {
        self.inspect(token).active()
    }

    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Option<SessionPayload> {
        self.inspect_at(token, now).active()
    }

    /// Raw session cookie value from a request jar.
    pub fn read(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.cookie_name)
            .map(|cookie| cookie.value().to_owned())
    }

    pub fn session_cookie(&self, token: &SessionToken) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), token.value.clone()))
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(cookie::time::Duration::seconds(self.ttl.num_seconds()))
            .build()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.cookie_name.clone(), ""))
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(SameSite::Lax)
            .path("/")
            .build();
        cookie.make_removal();
        cookie
    }

    /// Encodes a new session and adds its cookie to `jar`.
    pub fn issue(
        &self,
        jar: CookieJar,
        subject_id: i64,
        role: Role,
    ) -> Result<(CookieJar, SessionPayload), AppError> {
        let token = self.encode(subject_id, role)?;
        let cookie = self.session_cookie(&token);
        Ok((jar.add(cookie), token.payload))
    }

    /// Adds a removal cookie for the session to `jar`.
    pub fn evict(&self, jar: CookieJar) -> CookieJar {
        jar.add(self.removal_cookie())
    }
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCodec")
            .field("cookie_name", &self.cookie_name)
            .field("secure_cookie", &self.secure_cookie)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
