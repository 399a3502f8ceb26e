//! # Marquee Config
//!
//! Configuration types for the Marquee admin API, loaded from environment
//! variables:
//!
//! - [`server`]: listen address
//! - [`session`]: session cookie and signing configuration
//! - [`access`]: protected admin namespace and unlisted-path policy
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`observability`]: log level, log directory and metrics switch
//!
//! Everything is read once at startup into an [`AppConfig`], which is then
//! shared read-only for the life of the process.
//!
//! # Example
//!
//! ```ignore
//! use marquee_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("session ttl: {}s", config.session.ttl_seconds);
//! ```

pub mod access;
pub mod cors;
pub mod observability;
pub mod server;
pub mod session;

use std::env;
use std::path::PathBuf;

pub use access::{AccessConfig, UnlistedPathPolicy};
pub use cors::CorsConfig;
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Complete process configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub access: AccessConfig,
    pub cors: CorsConfig,
    pub observability: ObservabilityConfig,
    /// JSON file holding the admin accounts allowed to log in.
    pub accounts_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            session: SessionConfig::from_env(),
            access: AccessConfig::from_env(),
            cors: CorsConfig::from_env(),
            observability: ObservabilityConfig::from_env(),
            accounts_file: env::var("ADMIN_ACCOUNTS_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Reads an environment-style boolean (`true/false`, `1/0`, `yes/no`, `on/off`).
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
