use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use marquee_auth::{CredentialStore, RoleMatrix, SessionCodec, StaticCredentialStore};
use marquee_config::AppConfig;

/// Shared, read-only state handed to every handler and middleware.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub codec: Arc<SessionCodec>,
    pub matrix: Arc<RoleMatrix>,
    pub accounts: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(config: AppConfig, accounts: Arc<dyn CredentialStore>) -> anyhow::Result<Self> {
        let codec = SessionCodec::new(&config.session);
        let matrix = RoleMatrix::standard(&config.access).context("failed to build role matrix")?;

        Ok(Self {
            config: Arc::new(config),
            codec: Arc::new(codec),
            matrix: Arc::new(matrix),
            accounts,
        })
    }

    /// Builds the state, loading admin accounts from `ADMIN_ACCOUNTS_FILE`.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let accounts = match &config.accounts_file {
            Some(path) => {
                let store = StaticCredentialStore::from_file(path)?;
                info!(path = %path.display(), accounts = store.len(), "Loaded admin accounts");
                store
            }
            None => {
                warn!("ADMIN_ACCOUNTS_FILE is not set, every login will be rejected");
                StaticCredentialStore::default()
            }
        };

        Self::new(config, Arc::new(accounts))
    }
}
