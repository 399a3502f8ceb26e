//! Operator helpers behind `marquee-cli`.

use std::fmt;

use marquee_auth::{Role, RoleMatrix, SessionCodec, SessionToken};
use marquee_config::{AccessConfig, SessionConfig};
use marquee_core::AppError;

/// Signs a session for `subject_id` with the configured secret and lifetime.
pub fn issue_session_token(
    config: &SessionConfig,
    subject_id: i64,
    role: Role,
) -> Result<SessionToken, AppError> {
    SessionCodec::new(config).encode(subject_id, role)
}

/// What the gate would do with a path, per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    pub path: String,
    pub protected: bool,
    /// Pattern of the matching matrix entry; `None` when the fallback applied.
    pub matched_pattern: Option<String>,
    pub allowed_roles: Vec<Role>,
}

impl PathReport {
    pub fn permits(&self, role: Role) -> bool {
        !self.protected || self.allowed_roles.contains(&role)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:      {}", self.path)?;
        if !self.protected {
            return write!(f, "gate:      not protected, forwarded without a session");
        }

        match &self.matched_pattern {
            Some(pattern) => writeln!(f, "matched:   {pattern}")?,
            None => writeln!(f, "matched:   none (unlisted-path policy applied)")?,
        }

        let roles: Vec<&str> = self.allowed_roles.iter().map(Role::as_str).collect();
        if roles.is_empty() {
            write!(f, "allowed:   nobody")
        } else {
            write!(f, "allowed:   {}", roles.join(", "))
        }
    }
}

pub fn describe_path(matrix: &RoleMatrix, access: &AccessConfig, path: &str) -> PathReport {
    let protected = access.is_protected(path);
    let (matched_pattern, allowed_roles) = if protected {
        (
            matrix.lookup(path).map(|entry| entry.pattern().to_string()),
            matrix.required_roles(path).iter().copied().collect(),
        )
    } else {
        (None, Role::ALL.to_vec())
    };

    PathReport {
        path: path.to_string(),
        protected,
        matched_pattern,
        allowed_roles,
    }
}
