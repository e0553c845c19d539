//! Server-rendered HTML pages, built from askama templates.
//!
//! Templates escape every interpolated value. The rendered markdown body of
//! a post is the only fragment marked `safe`.

pub mod admin;
pub mod public;

use askama::Template;
use chrono::{DateTime, Utc};

use quill_core::domain::{PageMeta, SiteInfo};

/// Document title and optional meta description shared by every page.
#[derive(Debug, Clone)]
pub struct PageHead {
    pub title: String,
    /// Only loaded public views publish a description.
    pub description: Option<String>,
}

impl PageHead {
    pub fn site(site: &SiteInfo) -> Self {
        Self {
            title: site.name.clone(),
            description: None,
        }
    }
}

impl From<&PageMeta> for PageHead {
    fn from(meta: &PageMeta) -> Self {
        Self {
            title: meta.title.clone(),
            description: Some(meta.description.clone()),
        }
    }
}

/// Calendar date shown under post titles.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Page shown when the post store cannot be reached.
#[derive(Template)]
#[template(path = "error.html")]
pub struct UnavailableTemplate {
    pub head: PageHead,
}

impl UnavailableTemplate {
    pub fn new(site: &SiteInfo) -> Self {
        Self {
            head: PageHead::site(site),
        }
    }
}
