//! Document title and meta description for the public views.

use serde::{Deserialize, Serialize};

use super::Post;

/// Site-wide naming used when composing page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
}

/// The title and single meta description a public view publishes once its
/// data has loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Metadata for the public post list.
    pub fn blog_index(site: &SiteInfo) -> Self {
        Self {
            title: format!("Blog | {}", site.name),
            description: site.description.clone(),
        }
    }

    /// Metadata for a single public post.
    pub fn post(site: &SiteInfo, post: &Post) -> Self {
        Self {
            title: format!("{} | {} Blog", post.title, site.name),
            description: post.meta_description.clone(),
        }
    }
}
