//! Authentication ports.

use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::Session;

/// Claims carried by a session token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
}

/// Token service trait for session tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for an authenticated admin.
    fn generate_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of issued tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Identity service deciding who may use the admin surface.
///
/// Session changes are published on a watch channel; dropping the receiver
/// ends the subscription.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check credentials and make the resulting session current.
    ///
    /// On failure the current session is left as it was.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Clear the current session.
    async fn sign_out(&self);

    /// Observe session presence or absence.
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
