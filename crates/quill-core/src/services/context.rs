//! Application state shared by the views.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{Session, SiteInfo};
use crate::error::DomainError;
use crate::ports::{History, IdentityProvider, PostGateway};
use crate::routing::{Router, View};

use super::{PostRepository, ViewData, load_view};

/// Single owner of the session, the current location and the post cache.
///
/// Session and location changes arrive on watch channels instead of
/// ambient globals; dropping the context drops both subscriptions.
pub struct AppContext {
    router: Router,
    identity: Arc<dyn IdentityProvider>,
    session: watch::Receiver<Option<Session>>,
    posts: PostRepository,
    site: SiteInfo,
}

impl AppContext {
    pub fn new(
        history: Arc<dyn History>,
        identity: Arc<dyn IdentityProvider>,
        gateway: Arc<dyn PostGateway>,
        site: SiteInfo,
    ) -> Self {
        let session = identity.subscribe();
        Self {
            router: Router::new(history),
            identity,
            session,
            posts: PostRepository::new(gateway),
            site,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn posts(&mut self) -> &mut PostRepository {
        &mut self.posts
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .is_some_and(|session| !session.is_expired())
    }

    /// The view for the current path and session.
    pub fn active_view(&self) -> View {
        self.router.route().view(self.is_authenticated())
    }

    /// In-app navigation. Returns the view to show next.
    pub fn navigate(&self, path: &str) -> View {
        self.router.navigate(path).view(self.is_authenticated())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let session = self.identity.sign_in(email, password).await.map_err(|err| {
            tracing::warn!(error = %err, "Admin sign-in rejected");
            DomainError::Auth(err)
        })?;
        tracing::info!(user_id = %session.user_id, "Admin signed in");
        Ok(session)
    }

    pub async fn sign_out(&self) {
        self.identity.sign_out().await;
        tracing::info!("Admin signed out");
    }

    /// Wait for the next session change. `false` once the provider is gone.
    pub async fn session_changed(&mut self) -> bool {
        self.session.changed().await.is_ok()
    }

    /// Load data for the active view.
    pub async fn load(&mut self) -> Result<ViewData, DomainError> {
        let view = self.active_view();
        load_view(&mut self.posts, view, &self.site).await
    }
}
