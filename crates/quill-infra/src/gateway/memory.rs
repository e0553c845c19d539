//! In-memory post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{NewPostRecord, Post, PostChanges};
use quill_core::error::GatewayError;
use quill_core::ports::{PostGateway, SortKey};

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Ids are random UUIDs. Note: data is lost on process restart.
pub struct InMemoryPostGateway {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostGateway {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-populate the store, keeping each post's id.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: RwLock::new(posts.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl Default for InMemoryPostGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(mut posts: Vec<Post>, order_by: SortKey) -> Vec<Post> {
    posts.sort_by(|a, b| order_by.compare_desc(a, b));
    posts
}

#[async_trait]
impl PostGateway for InMemoryPostGateway {
    async fn list_posts(&self, order_by: SortKey) -> Result<Vec<Post>, GatewayError> {
        let posts = self.posts.read().await;
        Ok(sorted(posts.values().cloned().collect(), order_by))
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, GatewayError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, GatewayError> {
        let posts = self.posts.read().await;
        let matches = posts.values().filter(|p| p.slug == slug).cloned().collect();
        Ok(sorted(matches, SortKey::CreatedAt))
    }

    async fn insert_post(&self, record: &NewPostRecord) -> Result<Uuid, GatewayError> {
        let id = Uuid::new_v4();
        let mut posts = self.posts.write().await;
        posts.insert(id, record.clone().into_post(id));
        tracing::debug!(post_id = %id, "Post stored in memory");
        Ok(id)
    }

    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<(), GatewayError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(GatewayError::NotFound)?;
        changes.apply_to(post);
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), GatewayError> {
        let mut posts = self.posts.write().await;
        if posts.remove(&id).is_none() {
            tracing::debug!(post_id = %id, "Delete of absent post ignored");
        }
        Ok(())
    }
}
