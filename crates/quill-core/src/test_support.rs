//! Test doubles for the ports.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use crate::domain::{NewPostRecord, Post, PostChanges, PostFields, Session};
use crate::error::GatewayError;
use crate::ports::{AuthError, History, IdentityProvider, PostGateway, SortKey};

pub fn fields(title: &str) -> PostFields {
    PostFields {
        title: title.to_string(),
        content: "Some **content**.".to_string(),
        author: "Cynthia".to_string(),
        image_url: None,
        meta_description: format!("About {title}"),
    }
}

/// A stored post created `minutes_ago` minutes before now.
pub fn stored_post(title: &str, minutes_ago: i64) -> Post {
    let created_at: DateTime<Utc> = Utc::now() - TimeDelta::minutes(minutes_ago);
    NewPostRecord {
        fields: fields(title),
        slug: crate::content::slugify(title),
        created_at,
    }
    .into_post(Uuid::new_v4())
}

/// Gateway double that records every call and can be told to fail one.
#[derive(Default)]
pub struct RecordingGateway {
    posts: Mutex<Vec<Post>>,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<Option<&'static str>>,
}

impl RecordingGateway {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn fail_on(&self, operation: &'static str) {
        *self.failing.lock().unwrap() = Some(operation);
    }

    pub fn push(&self, post: Post) {
        self.posts.lock().unwrap().push(post);
    }

    fn record(&self, operation: &'static str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(operation);
        if *self.failing.lock().unwrap() == Some(operation) {
            return Err(GatewayError::Connection(format!("{operation} unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl PostGateway for RecordingGateway {
    async fn list_posts(&self, order_by: SortKey) -> Result<Vec<Post>, GatewayError> {
        self.record("list_posts")?;
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| order_by.compare_desc(a, b));
        Ok(posts)
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, GatewayError> {
        self.record("get_post")?;
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, GatewayError> {
        self.record("find_posts_by_slug")?;
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.slug == slug)
            .cloned()
            .collect())
    }

    async fn insert_post(&self, record: &NewPostRecord) -> Result<Uuid, GatewayError> {
        self.record("insert_post")?;
        let id = Uuid::new_v4();
        self.push(record.clone().into_post(id));
        Ok(id)
    }

    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<(), GatewayError> {
        self.record("update_post")?;
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GatewayError::NotFound)?;
        changes.apply_to(post);
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), GatewayError> {
        self.record("delete_post")?;
        self.posts.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

/// History double keeping a flat list of pushed paths.
pub struct FakeHistory {
    entries: Mutex<Vec<String>>,
}

impl FakeHistory {
    pub fn starting_at(path: &str) -> Self {
        Self {
            entries: Mutex::new(vec![path.to_string()]),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl History for FakeHistory {
    fn push(&self, path: &str) {
        self.entries.lock().unwrap().push(path.to_string());
    }

    fn current(&self) -> String {
        self.entries.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

/// Identity double accepting one fixed credential pair.
pub struct FakeIdentity {
    session: watch::Sender<Option<Session>>,
}

impl FakeIdentity {
    pub const EMAIL: &'static str = "admin@example.com";
    pub const PASSWORD: &'static str = "correct horse";

    pub fn new() -> Self {
        Self {
            session: watch::channel(None).0,
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email != Self::EMAIL || password != Self::PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        let session = Session {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            token: "token".to_string(),
            expires_at: Utc::now() + TimeDelta::hours(1),
        };
        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) {
        self.session.send_replace(None);
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
