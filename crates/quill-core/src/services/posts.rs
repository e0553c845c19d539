//! Post repository - orchestrates gateway calls and owns the cached list.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::content::slugify;
use crate::domain::{NewPostRecord, Post, PostChanges, PostFields};
use crate::error::{DomainError, GatewayError};
use crate::ports::{PostGateway, SortKey};

/// Post lifecycle on top of a [`PostGateway`].
///
/// Every successful `create`, `update` or `delete` is followed by a full
/// [`list`](Self::list) so the cached posts match the store. The cache is
/// only ever replaced wholesale; a failed operation leaves it untouched.
/// Mutations take `&mut self`, so a refresh is always issued after its
/// mutation has completed.
pub struct PostRepository {
    gateway: Arc<dyn PostGateway>,
    posts: Vec<Post>,
}

impl PostRepository {
    pub fn new(gateway: Arc<dyn PostGateway>) -> Self {
        Self {
            gateway,
            posts: Vec::new(),
        }
    }

    /// The posts as of the last successful refresh, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Fetch every post, newest first, and replace the cached list.
    pub async fn list(&mut self) -> Result<&[Post], DomainError> {
        let posts = self
            .gateway
            .list_posts(SortKey::CreatedAt)
            .await
            .map_err(gateway_failure("list"))?;

        tracing::debug!(count = posts.len(), "Post list refreshed");
        self.posts = posts;
        Ok(&self.posts)
    }

    /// A single post by id.
    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.gateway
            .get_post(id)
            .await
            .map_err(gateway_failure("get"))?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// The post published under `slug`.
    ///
    /// Slugs are not unique. When several posts share one, the newest by
    /// `created_at` wins, the same post `list` would show first.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        let mut matches = self
            .gateway
            .find_posts_by_slug(slug)
            .await
            .map_err(gateway_failure("get_by_slug"))?;

        if matches.len() > 1 {
            tracing::warn!(
                slug = %slug,
                matches = matches.len(),
                "Several posts share a slug, serving the newest"
            );
        }

        matches.sort_by(|a, b| SortKey::CreatedAt.compare_desc(a, b));
        matches
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::post_not_found(slug))
    }

    /// Validate, derive the slug, store, then refresh.
    pub async fn create(&mut self, fields: PostFields) -> Result<Post, DomainError> {
        fields.validate()?;

        let record = NewPostRecord {
            slug: slugify(&fields.title),
            fields,
            created_at: Utc::now(),
        };
        let id = self
            .gateway
            .insert_post(&record)
            .await
            .map_err(gateway_failure("create"))?;

        let post = record.into_post(id);
        tracing::info!(post_id = %id, slug = %post.slug, "Post created");

        self.list().await?;
        Ok(post)
    }

    /// Validate, re-derive the slug, overwrite, then refresh.
    pub async fn update(&mut self, id: Uuid, fields: PostFields) -> Result<Post, DomainError> {
        fields.validate()?;

        let changes = PostChanges {
            slug: slugify(&fields.title),
            fields,
            updated_at: Utc::now(),
        };
        match self.gateway.update_post(id, &changes).await {
            Ok(()) => {}
            Err(GatewayError::NotFound) => return Err(DomainError::post_not_found(id)),
            Err(err) => return Err(gateway_failure("update")(err)),
        }
        tracing::info!(post_id = %id, slug = %changes.slug, "Post updated");

        self.list().await?;
        self.posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Remove a post, then refresh. Deleting an already-deleted id is harmless.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), DomainError> {
        self.gateway
            .delete_post(id)
            .await
            .map_err(gateway_failure("delete"))?;
        tracing::info!(post_id = %id, "Post deleted");

        self.list().await?;
        Ok(())
    }
}

fn gateway_failure(operation: &'static str) -> impl FnOnce(GatewayError) -> DomainError {
    move |err| {
        tracing::error!(operation, error = %err, "Post gateway call failed");
        DomainError::Gateway(err)
    }
}
