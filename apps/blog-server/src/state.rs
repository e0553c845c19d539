//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;

use quill_core::PostRepository;
use quill_core::domain::SiteInfo;
use quill_core::ports::{PasswordService, PostGateway};
use quill_infra::{
    AdminAccount, Argon2PasswordService, InMemoryPostGateway, JwtConfig, JwtTokenService,
    LocalIdentityProvider, SeaOrmPostGateway, TimeoutGateway,
};

use crate::config::{AppConfig, AuthConfig};

/// Shared application state.
///
/// The repository sits behind one async mutex, so post operations run one
/// at a time and each refresh follows its own mutation.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<Mutex<PostRepository>>,
    pub identity: Arc<LocalIdentityProvider>,
    pub site: SiteInfo,
    pub default_author: String,
    /// `"postgres"` or `"memory"`.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let (gateway, storage) = Self::gateway(config).await;
        let identity = Arc::new(Self::identity(&config.auth)?);

        tracing::info!(storage, "Application state initialized");

        Ok(Self::from_parts(
            gateway,
            identity,
            config.site.clone(),
            config.default_author.clone(),
            storage,
        ))
    }

    pub fn from_parts(
        gateway: Arc<dyn PostGateway>,
        identity: Arc<LocalIdentityProvider>,
        site: SiteInfo,
        default_author: String,
        storage: &'static str,
    ) -> Self {
        Self {
            posts: Arc::new(Mutex::new(PostRepository::new(gateway))),
            identity,
            site,
            default_author,
            storage,
        }
    }

    async fn gateway(config: &AppConfig) -> (Arc<dyn PostGateway>, &'static str) {
        let limit = config.gateway_timeout;

        if let Some(db_config) = &config.database {
            match quill_infra::database::connect(db_config).await {
                Ok(conn) => {
                    let gateway = TimeoutGateway::new(SeaOrmPostGateway::new(conn), limit);
                    return (Arc::new(gateway), "postgres");
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Posts are kept in memory only.");
        }

        let gateway = TimeoutGateway::new(InMemoryPostGateway::new(), limit);
        (Arc::new(gateway), "memory")
    }

    fn identity(auth: &AuthConfig) -> anyhow::Result<LocalIdentityProvider> {
        let passwords = Arc::new(Argon2PasswordService::new());

        let password_hash = match (&auth.admin_password_hash, &auth.admin_password) {
            (Some(hash), _) => hash.clone(),
            (None, Some(password)) => passwords
                .hash(password)
                .context("hashing ADMIN_PASSWORD")?,
            (None, None) => {
                anyhow::bail!("set ADMIN_PASSWORD_HASH or ADMIN_PASSWORD to enable the admin panel")
            }
        };

        if auth.jwt.secret == JwtConfig::default().secret {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }

        Ok(LocalIdentityProvider::new(
            AdminAccount::new(auth.admin_email.clone(), password_hash),
            passwords,
            Arc::new(JwtTokenService::new(auth.jwt.clone())),
        ))
    }
}

#[cfg(test)]
pub mod testing {
    //! State wired to in-memory adapters for handler tests.

    use super::*;

    pub const ADMIN_EMAIL: &str = "admin@example.com";
    pub const ADMIN_PASSWORD: &str = "lavender";

    pub fn state() -> AppState {
        let passwords = Arc::new(Argon2PasswordService::new());
        let hash = passwords.hash(ADMIN_PASSWORD).unwrap();
        let identity = LocalIdentityProvider::new(
            AdminAccount::new(ADMIN_EMAIL, hash),
            passwords,
            Arc::new(JwtTokenService::new(JwtConfig::default())),
        );

        AppState::from_parts(
            Arc::new(InMemoryPostGateway::new()),
            Arc::new(identity),
            SiteInfo {
                name: "Quill".to_string(),
                description: "A quiet blog.".to_string(),
            },
            "Quill Team".to_string(),
            "memory",
        )
    }

    pub fn admin_token(state: &AppState) -> String {
        state
            .identity
            .authenticate(ADMIN_EMAIL, ADMIN_PASSWORD)
            .unwrap()
            .token
    }
}
