//! Data each view needs once routing has decided what to show.

use crate::content::render_markdown;
use crate::domain::{PageMeta, Post, SiteInfo};
use crate::error::DomainError;
use crate::routing::View;

use super::PostRepository;

/// A loaded view, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    AdminLogin,
    AdminPanel {
        posts: Vec<Post>,
    },
    PublicList {
        posts: Vec<Post>,
        meta: PageMeta,
    },
    PublicPost {
        post: Post,
        /// `post.content` rendered as markup.
        body: String,
        meta: PageMeta,
    },
    PostNotFound {
        slug: String,
    },
}

impl ViewData {
    /// Page metadata the view publishes. Only loaded public views carry one.
    pub fn meta(&self) -> Option<&PageMeta> {
        match self {
            ViewData::PublicList { meta, .. } | ViewData::PublicPost { meta, .. } => Some(meta),
            _ => None,
        }
    }
}

/// Load what `view` shows.
///
/// An unknown slug is a view state, not an error. Gateway failures are
/// returned as-is for the caller to surface.
pub async fn load_view(
    repo: &mut PostRepository,
    view: View,
    site: &SiteInfo,
) -> Result<ViewData, DomainError> {
    match view {
        View::AdminLogin => Ok(ViewData::AdminLogin),
        View::AdminPanel => Ok(ViewData::AdminPanel {
            posts: repo.list().await?.to_vec(),
        }),
        View::PublicList => Ok(ViewData::PublicList {
            posts: repo.list().await?.to_vec(),
            meta: PageMeta::blog_index(site),
        }),
        View::PublicPost { slug } => match repo.get_by_slug(&slug).await {
            Ok(post) => Ok(ViewData::PublicPost {
                body: render_markdown(&post.content),
                meta: PageMeta::post(site, &post),
                post,
            }),
            Err(err) if err.is_not_found() => Ok(ViewData::PostNotFound { slug }),
            Err(err) => Err(err),
        },
    }
}
