//! Local identity provider: one admin account, Argon2 passwords, JWT sessions.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::watch;

use quill_core::domain::Session;
use quill_core::ports::{AuthError, IdentityProvider, PasswordService, TokenService};

use super::AdminAccount;

/// Identity provider backed by a configured admin account.
///
/// [`authenticate`](Self::authenticate) and [`validate`](Self::validate) are
/// stateless and safe to share between requests. The `IdentityProvider`
/// methods additionally track one current session for an interactive client.
pub struct LocalIdentityProvider {
    account: AdminAccount,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    session: watch::Sender<Option<Session>>,
}

impl LocalIdentityProvider {
    pub fn new(
        account: AdminAccount,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            account,
            passwords,
            tokens,
            session,
        }
    }

    /// Check credentials and issue a session without changing current state.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.account
            .check(self.passwords.as_ref(), email, password)?;

        let token = self
            .tokens
            .generate_token(self.account.user_id, &self.account.email)?;

        Ok(Session {
            user_id: self.account.user_id,
            email: self.account.email.clone(),
            token,
            expires_at: Utc::now() + TimeDelta::seconds(self.tokens.expiration_seconds()),
        })
    }

    /// Rebuild a session from a previously issued token.
    pub fn validate(&self, token: &str) -> Result<Session, AuthError> {
        let claims = self.tokens.validate_token(token)?;
        if !self.account.matches_email(&claims.email) {
            return Err(AuthError::InvalidToken("unknown account".to_string()));
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AuthError::InvalidToken("bad expiry".to_string()))?;

        Ok(Session {
            user_id: claims.user_id,
            email: claims.email,
            token: token.to_string(),
            expires_at,
        })
    }

    pub fn token_lifetime_seconds(&self) -> i64 {
        self.tokens.expiration_seconds()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.authenticate(email, password)?;
        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) {
        self.session.send_replace(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
