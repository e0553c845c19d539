//! Admin login and post management pages.

use askama::Template;
use uuid::Uuid;

use quill_core::domain::{Post, PostFields, SiteInfo};

use super::{PageHead, format_date};

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub head: PageHead,
    pub error: Option<String>,
}

impl LoginTemplate {
    pub fn new(site: &SiteInfo, error: Option<&str>) -> Self {
        Self {
            head: PageHead::site(site),
            error: error.map(str::to_string),
        }
    }
}

/// State of the create/edit form on the admin panel.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    /// Set while editing an existing post.
    pub editing: Option<Uuid>,
    pub fields: PostFields,
    pub error: Option<String>,
}

impl PostForm {
    pub fn blank(default_author: &str) -> Self {
        Self {
            fields: PostFields {
                author: default_author.to_string(),
                ..PostFields::default()
            },
            ..Self::default()
        }
    }

    pub fn editing(post: &Post) -> Self {
        Self {
            editing: Some(post.id),
            fields: PostFields {
                title: post.title.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
                image_url: post.image_url.clone(),
                meta_description: post.meta_description.clone(),
            },
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn heading(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Post"
        } else {
            "Create New Post"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Post"
        } else {
            "Publish Post"
        }
    }

    pub fn action(&self) -> String {
        match self.editing {
            Some(id) => format!("/admin/posts/{id}"),
            None => "/admin/posts".to_string(),
        }
    }

    pub fn image_url(&self) -> &str {
        self.fields.image_url.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub date: String,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            date: format_date(&post.created_at),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/panel.html")]
pub struct PanelTemplate {
    pub head: PageHead,
    pub email: String,
    pub form: PostForm,
    pub posts: Vec<PostRow>,
}

impl PanelTemplate {
    pub fn new(site: &SiteInfo, email: &str, posts: &[Post], form: PostForm) -> Self {
        Self {
            head: PageHead::site(site),
            email: email.to_string(),
            form,
            posts: posts.iter().map(PostRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Quill".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_blank_form_prefills_author() {
        let html = PanelTemplate::new(&site(), "a@b.c", &[], PostForm::blank("Quill Team"))
            .render()
            .unwrap();

        assert!(html.contains(r#"name="author" value="Quill Team""#));
        assert!(html.contains("Create New Post"));
        assert!(!html.contains("Cancel Edit"));
    }

    #[test]
    fn test_edit_form_targets_post() {
        let post = quill_core::domain::NewPostRecord {
            fields: PostFields {
                title: "Tea & Toast".to_string(),
                content: "body".to_string(),
                author: "Cynthia".to_string(),
                image_url: None,
                meta_description: "d".to_string(),
            },
            slug: "tea-toast".to_string(),
            created_at: chrono::Utc::now(),
        }
        .into_post(Uuid::new_v4());

        let html = PanelTemplate::new(&site(), "a@b.c", &[post.clone()], PostForm::editing(&post))
            .render()
            .unwrap();

        assert!(html.contains(&format!(r#"action="/admin/posts/{}""#, post.id)));
        assert!(html.contains(r#"value="Tea &amp; Toast""#));
        assert!(html.contains("Cancel Edit"));
    }

    #[test]
    fn test_login_error_is_escaped() {
        let html = LoginTemplate::new(&site(), Some("<bad>")).render().unwrap();
        assert!(html.contains("&lt;bad&gt;"));
    }
}
