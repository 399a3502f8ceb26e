//! Admin namespace configuration.
//!
//! Decides which request paths the session gate protects and what the role
//! matrix does with paths it has no entry for.
//!
//! # Environment Variables
//!
//! - `ADMIN_PATH_PREFIX`: protected namespace (default: `/api/admin`)
//! - `ADMIN_UNLISTED_PATH_POLICY`: `allow_all` (default), `admin_only` or `deny_all`

use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ADMIN_PREFIX: &str = "/api/admin";

/// What the role matrix grants on a protected path that matches no entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnlistedPathPolicy {
    /// Any authenticated role is let through.
    #[default]
    AllowAll,
    AdminOnly,
    DenyAll,
}

impl FromStr for UnlistedPathPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "allow_all" => Ok(Self::AllowAll),
            "admin_only" => Ok(Self::AdminOnly),
            "deny_all" => Ok(Self::DenyAll),
            other => Err(format!("unknown unlisted path policy: {other}")),
        }
    }
}

impl fmt::Display for UnlistedPathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AllowAll => "allow_all",
            Self::AdminOnly => "admin_only",
            Self::DenyAll => "deny_all",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    /// Namespace guarded by the session gate, without a trailing slash.
    pub admin_prefix: String,
    /// Paths inside the namespace reachable without a session.
    pub public_paths: Vec<String>,
    pub unlisted_policy: UnlistedPathPolicy,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ADMIN_PREFIX, UnlistedPathPolicy::default())
    }
}

impl AccessConfig {
    pub fn from_env() -> Self {
        let prefix = env::var("ADMIN_PATH_PREFIX").unwrap_or_else(|_| DEFAULT_ADMIN_PREFIX.into());
        let policy = match env::var("ADMIN_UNLISTED_PATH_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to allow_all for unlisted admin paths");
                UnlistedPathPolicy::AllowAll
            }),
            Err(_) => UnlistedPathPolicy::AllowAll,
        };

        Self::with_prefix(&prefix, policy)
    }

    /// Builds the config for a namespace; login and logout under it stay public.
    pub fn with_prefix(prefix: &str, unlisted_policy: UnlistedPathPolicy) -> Self {
        let trimmed = prefix.trim().trim_end_matches('/');
        let admin_prefix = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self {
            public_paths: vec![
                format!("{admin_prefix}/auth/login"),
                format!("{admin_prefix}/auth/logout"),
            ],
            admin_prefix,
            unlisted_policy,
        }
    }

    /// True for the prefix itself and anything below it.
    pub fn in_namespace(&self, path: &str) -> bool {
        match path.strip_prefix(self.admin_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        let path = normalize(path);
        self.public_paths.iter().any(|p| p == path)
    }

    /// Whether a request to `path` must carry a valid session.
    pub fn is_protected(&self, path: &str) -> bool {
        self.in_namespace(path) && !self.is_public(path)
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
