//! Session cookie configuration.
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: HMAC key used to sign session tokens
//! - `SESSION_TTL_SECONDS`: session lifetime (default: 604800, 7 days)
//! - `SESSION_COOKIE_NAME`: cookie name (default: `admin-session`)
//! - `SESSION_COOKIE_SECURE`: force the `Secure` attribute on or off
//!   (default: on when `APP_ENV=production`)

use std::env;
use std::fmt;

use crate::parse_bool;

pub const DEFAULT_COOKIE_NAME: &str = "admin-session";
pub const DEFAULT_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;
const DEFAULT_SECRET: &str = "marquee-dev-session-secret-change-me";

#[derive(Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_seconds: i64,
    pub cookie_name: String,
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            ttl_seconds: DEFAULT_TTL_SECONDS,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secure_cookie: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to the
    /// defaults for missing or unusable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("APP_ENV")
            .map(|v| v.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let secret = match lookup("SESSION_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => {
                if production {
                    tracing::warn!("SESSION_SECRET is not set; using the development secret");
                }
                DEFAULT_SECRET.to_string()
            }
        };

        Self {
            secret,
            ttl_seconds: lookup("SESSION_TTL_SECONDS")
                .and_then(|s| s.trim().parse::<i64>().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(DEFAULT_TTL_SECONDS),
            cookie_name: lookup("SESSION_COOKIE_NAME")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            secure_cookie: lookup("SESSION_COOKIE_SECURE")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(production),
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("cookie_name", &self.cookie_name)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}
