//! Role matrix: which roles may call which admin paths.
//!
//! Entries are kept in insertion order and the first pattern that matches a
//! path decides. Paths no entry matches get the role set implied by the
//! configured [`UnlistedPathPolicy`].

use std::collections::BTreeSet;

use anyhow::Context;
use regex::Regex;

use marquee_config::{AccessConfig, UnlistedPathPolicy};

use crate::role::Role;

pub type RoleSet = BTreeSet<Role>;

/// One row of the matrix: a path pattern and the roles it admits.
#[derive(Clone, Debug)]
pub struct RoleRequirement {
    pattern: Regex,
    allowed_roles: RoleSet,
}

impl RoleRequirement {
    pub fn new<I>(pattern: &str, allowed_roles: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Role>,
    {
        let pattern =
            Regex::new(pattern).with_context(|| format!("invalid role pattern `{pattern}`"))?;

        Ok(Self {
            pattern,
            allowed_roles: allowed_roles.into_iter().collect(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn allowed_roles(&self) -> &RoleSet {
        &self.allowed_roles
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

#[derive(Clone, Debug)]
pub struct RoleMatrix {
    entries: Vec<RoleRequirement>,
    policy: UnlistedPathPolicy,
    fallback: RoleSet,
}

impl RoleMatrix {
    pub fn new(entries: Vec<RoleRequirement>, policy: UnlistedPathPolicy) -> Self {
        Self {
            entries,
            policy,
            fallback: fallback_roles(policy),
        }
    }

    /// The admin panel's table, rooted at the configured admin prefix.
    pub fn standard(access: &AccessConfig) -> anyhow::Result<Self> {
        use Role::{Admin, Editor, Viewer};

        let prefix = regex::escape(&access.admin_prefix);
        let rows: [(String, &[Role]); 7] = [
            (format!("^{prefix}/users(/.*)?$"), &[Admin]),
            (format!("^{prefix}/settings(/.*)?$"), &[Admin]),
            (format!("^{prefix}/backups?(/.*)?$"), &[Admin]),
            (format!("^{prefix}/integrations(/.*)?$"), &[Admin]),
            (
                format!(
                    "^{prefix}/(pages|posts|media|menus|forms|seo|redirects|translations)(/.*)?$"
                ),
                &[Admin, Editor],
            ),
            (format!("^{prefix}/analytics(/.*)?$"), &[Admin, Editor, Viewer]),
            (format!("^{prefix}/auth/session$"), &[Admin, Editor, Viewer]),
        ];

        let entries = rows
            .iter()
            .map(|(pattern, roles)| RoleRequirement::new(pattern, roles.iter().copied()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self::new(entries, access.unlisted_policy))
    }

    /// Roles granted on protected paths no entry matches.
    pub fn fallback(&self) -> &RoleSet {
        &self.fallback
    }

    pub fn policy(&self) -> UnlistedPathPolicy {
        self.policy
    }

    /// The first entry matching `path`, if any.
    pub fn lookup(&self, path: &str) -> Option<&RoleRequirement> {
        self.entries.iter().find(|entry| entry.matches(path))
    }

    pub fn required_roles(&self, path: &str) -> &RoleSet {
        self.lookup(path)
            .map(RoleRequirement::allowed_roles)
            .unwrap_or(&self.fallback)
    }

    pub fn permits(&self, path: &str, role: Role) -> bool {
        self.required_roles(path).contains(&role)
    }
}

fn fallback_roles(policy: UnlistedPathPolicy) -> RoleSet {
    match policy {
        UnlistedPathPolicy::AllowAll => Role::ALL.into_iter().collect(),
        UnlistedPathPolicy::AdminOnly => RoleSet::from([Role::Admin]),
        UnlistedPathPolicy::DenyAll => RoleSet::new(),
    }
}
