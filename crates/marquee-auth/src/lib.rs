//! # Marquee Auth
//!
//! Session and authorization primitives for the Marquee admin API.
//!
//! - [`role`]: the closed set of admin roles
//! - [`session`]: session claims, payloads and inspection outcomes
//! - [`codec`]: signing sessions into the `admin-session` cookie and back
//! - [`matrix`]: path-pattern to allowed-roles table
//! - [`accounts`]: admin accounts used by the login endpoint
//!
//! # Example
//!
//! ```ignore
//! use marquee_auth::{Role, RoleMatrix, SessionCodec};
//! use marquee_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! let codec = SessionCodec::new(&config.session);
//! let matrix = RoleMatrix::standard(&config.access)?;
//!
//! let token = codec.encode(42, Role::Editor)?;
//! let payload = codec.decode(&token.value).expect("fresh session");
//! assert!(matrix.permits("/api/admin/pages", payload.role));
//! ```

pub mod accounts;
pub mod codec;
pub mod matrix;
pub mod role;
pub mod session;

pub use accounts::{AdminAccount, CredentialStore, StaticCredentialStore};
pub use codec::{SessionCodec, SessionToken};
pub use matrix::{RoleMatrix, RoleRequirement, RoleSet};
pub use role::{ParseRoleError, Role};
pub use session::{SessionClaims, SessionPayload, SessionState};
