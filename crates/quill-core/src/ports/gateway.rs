use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPostRecord, Post, PostChanges};
use crate::error::GatewayError;

/// Field a post listing is ordered by, always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    /// Descending comparison of two posts on this key.
    ///
    /// Posts that were never updated sort after updated ones for `UpdatedAt`.
    pub fn compare_desc(self, a: &Post, b: &Post) -> std::cmp::Ordering {
        match self {
            SortKey::CreatedAt => b.created_at.cmp(&a.created_at),
            SortKey::UpdatedAt => b.updated_at.cmp(&a.updated_at),
        }
    }
}

/// Remote document store holding post records.
#[async_trait]
pub trait PostGateway: Send + Sync {
    /// All posts, ordered descending by `order_by`.
    async fn list_posts(&self, order_by: SortKey) -> Result<Vec<Post>, GatewayError>;

    /// A single post by id.
    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, GatewayError>;

    /// Posts whose slug matches exactly. Normally zero or one.
    async fn find_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, GatewayError>;

    /// Store a new post and return the id the store assigned.
    async fn insert_post(&self, record: &NewPostRecord) -> Result<Uuid, GatewayError>;

    /// Overwrite an existing post. `GatewayError::NotFound` if absent.
    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<(), GatewayError>;

    /// Remove a post. Removing an id that does not exist succeeds.
    async fn delete_post(&self, id: Uuid) -> Result<(), GatewayError>;
}
