//! Deadline for every gateway call, so a hung store cannot hang a view.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::domain::{NewPostRecord, Post, PostChanges};
use quill_core::error::GatewayError;
use quill_core::ports::{PostGateway, SortKey};

/// Wraps a gateway and fails any call that outlives `limit`.
pub struct TimeoutGateway<G> {
    inner: G,
    limit: Duration,
}

impl<G: PostGateway> TimeoutGateway<G> {
    pub fn new(inner: G, limit: Duration) -> Self {
        Self { inner, limit }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, GatewayError>>,
    ) -> Result<T, GatewayError> {
        match tokio::time::timeout(self.limit, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation, limit = ?self.limit, "Gateway call timed out");
                Err(GatewayError::Timeout(self.limit))
            }
        }
    }
}

#[async_trait]
impl<G: PostGateway> PostGateway for TimeoutGateway<G> {
    async fn list_posts(&self, order_by: SortKey) -> Result<Vec<Post>, GatewayError> {
        self.bounded("list_posts", self.inner.list_posts(order_by))
            .await
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, GatewayError> {
        self.bounded("get_post", self.inner.get_post(id)).await
    }

    async fn find_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, GatewayError> {
        self.bounded("find_posts_by_slug", self.inner.find_posts_by_slug(slug))
            .await
    }

    async fn insert_post(&self, record: &NewPostRecord) -> Result<Uuid, GatewayError> {
        self.bounded("insert_post", self.inner.insert_post(record))
            .await
    }

    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<(), GatewayError> {
        self.bounded("update_post", self.inner.update_post(id, changes))
            .await
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), GatewayError> {
        self.bounded("delete_post", self.inner.delete_post(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryPostGateway;

    /// Never answers.
    struct StalledGateway;

    #[async_trait]
    impl PostGateway for StalledGateway {
        async fn list_posts(&self, _order_by: SortKey) -> Result<Vec<Post>, GatewayError> {
            std::future::pending().await
        }
        async fn get_post(&self, _id: Uuid) -> Result<Option<Post>, GatewayError> {
            std::future::pending().await
        }
        async fn find_posts_by_slug(&self, _slug: &str) -> Result<Vec<Post>, GatewayError> {
            std::future::pending().await
        }
        async fn insert_post(&self, _record: &NewPostRecord) -> Result<Uuid, GatewayError> {
            std::future::pending().await
        }
        async fn update_post(&self, _id: Uuid, _changes: &PostChanges) -> Result<(), GatewayError> {
            std::future::pending().await
        }
        async fn delete_post(&self, _id: Uuid) -> Result<(), GatewayError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_call_times_out() {
        let gateway = TimeoutGateway::new(StalledGateway, Duration::from_secs(5));

        let result = gateway.list_posts(SortKey::CreatedAt).await;

        assert!(matches!(result, Err(GatewayError::Timeout(d)) if d == Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let gateway = TimeoutGateway::new(InMemoryPostGateway::new(), Duration::from_secs(5));

        assert!(gateway.list_posts(SortKey::CreatedAt).await.unwrap().is_empty());
    }
}
