//! Public blog pages.

use askama::Template;

use quill_core::domain::{PageMeta, Post, SiteInfo};

use super::{PageHead, format_date};

/// A post as shown on the list and post pages.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub title: String,
    pub author: String,
    pub date: String,
    pub summary: String,
    pub slug: String,
    pub image_url: Option<String>,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            date: format_date(&post.created_at),
            summary: post.meta_description.clone(),
            slug: post.slug.clone(),
            image_url: post.image_url.clone(),
        }
    }
}

/// The post list, newest first.
#[derive(Template)]
#[template(path = "blog/list.html")]
pub struct PostListTemplate {
    pub head: PageHead,
    pub site_name: String,
    pub site_description: String,
    pub posts: Vec<PostCard>,
}

impl PostListTemplate {
    pub fn new(site: &SiteInfo, meta: &PageMeta, posts: &[Post]) -> Self {
        Self {
            head: PageHead::from(meta),
            site_name: site.name.clone(),
            site_description: site.description.clone(),
            posts: posts.iter().map(PostCard::from).collect(),
        }
    }
}

/// A single post. `body` is already-rendered markup.
#[derive(Template)]
#[template(path = "blog/post.html")]
pub struct PostTemplate {
    pub head: PageHead,
    pub post: PostCard,
    pub body: String,
}

impl PostTemplate {
    pub fn new(meta: &PageMeta, post: &Post, body: String) -> Self {
        Self {
            head: PageHead::from(meta),
            post: PostCard::from(post),
            body,
        }
    }
}

#[derive(Template)]
#[template(path = "blog/not_found.html")]
pub struct PostNotFoundTemplate {
    pub head: PageHead,
}

impl PostNotFoundTemplate {
    pub fn new(site: &SiteInfo, slug: &str) -> Self {
        tracing::debug!(slug, "Rendering missing post page");
        Self {
            head: PageHead::site(site),
        }
    }
}
