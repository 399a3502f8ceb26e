//! # Marquee Admin API
//!
//! Session-cookie authentication and role-based authorization for the admin
//! API of the Marquee marketing site.
//!
//! ## Overview
//!
//! - **Sessions**: a signed `admin-session` cookie carrying subject id, role
//!   and expiry, issued at login and evicted at logout or on expiry
//! - **Role matrix**: ordered path patterns mapped to the roles allowed on them
//! - **Gate**: middleware in front of everything under `/api/admin` that
//!   rejects missing sessions with 401 and disallowed roles with 403
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── marquee-core/     # AppError, password hashing
//! ├── marquee-config/   # AppConfig, one struct per concern
//! └── marquee-auth/     # roles, session codec, role matrix, accounts
//! src/
//! ├── cli/              # helpers behind marquee-cli
//! ├── middleware/       # session gate and AuthUser extractor
//! └── modules/          # auth endpoints, health and 404
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! SESSION_SECRET=change-me
//! SESSION_TTL_SECONDS=604800
//! ADMIN_ACCOUNTS_FILE=config/admins.json
//! ADMIN_UNLISTED_PATH_POLICY=allow_all
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: operator helpers (session issuing, path inspection)
//! - [`docs`]: OpenAPI documentation, served at `/swagger-ui` and `/scalar`
//! - [`logging`]: tracing setup and request logging
//! - [`metrics`]: Prometheus metrics endpoint
//! - [`middleware`]: session gate and extractors
//! - [`modules`]: feature modules
//! - [`router`]: main application router
//! - [`state`]: shared application state
//! - [`validator`]: request validation utilities

pub mod cli;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use marquee_auth;
pub use marquee_config;
pub use marquee_core;
