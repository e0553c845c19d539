use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Upper bound for `meta_description`, counted in characters.
pub const META_DESCRIPTION_MAX: usize = 160;

/// Post entity - a published blog article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub meta_description: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The admin-editable fields of a post.
///
/// `slug` and the timestamps are never part of this set; they are derived
/// when the fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub meta_description: String,
}

impl PostFields {
    /// Check required fields and length limits.
    ///
    /// Every missing field is reported, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
            ("meta_description", &self.meta_description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let actual = self.meta_description.chars().count();
        if actual > META_DESCRIPTION_MAX {
            return Err(ValidationError::TooLong {
                field: "meta_description",
                max: META_DESCRIPTION_MAX,
                actual,
            });
        }

        Ok(())
    }

    /// The image URL with blank input folded to `None`.
    pub fn normalized_image_url(&self) -> Option<String> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    }
}

/// Everything the gateway stores for a brand-new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPostRecord {
    pub fields: PostFields,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl NewPostRecord {
    /// Materialize the stored post once the gateway has assigned an id.
    pub fn into_post(self, id: Uuid) -> Post {
        let image_url = self.fields.normalized_image_url();
        Post {
            id,
            title: self.fields.title,
            content: self.fields.content,
            author: self.fields.author,
            image_url,
            meta_description: self.fields.meta_description,
            slug: self.slug,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Replacement values for an existing post. `created_at` is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub fields: PostFields,
    pub slug: String,
    pub updated_at: DateTime<Utc>,
}

impl PostChanges {
    /// Apply the changes in place, leaving `id` and `created_at` untouched.
    pub fn apply_to(&self, post: &mut Post) {
        post.title = self.fields.title.clone();
        post.content = self.fields.content.clone();
        post.author = self.fields.author.clone();
        post.image_url = self.fields.normalized_image_url();
        post.meta_description = self.fields.meta_description.clone();
        post.slug = self.slug.clone();
        post.updated_at = Some(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> PostFields {
        PostFields {
            title: "Herbal Teas".to_string(),
            content: "Chamomile and mint.".to_string(),
            author: "Cynthia".to_string(),
            image_url: None,
            meta_description: "A short guide to herbal teas.".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_fields() {
        assert!(fields().validate().is_ok());
    }

    #[test]
    fn test_validate_names_all_missing_fields() {
        let input = PostFields {
            title: String::new(),
            meta_description: String::new(),
            ..fields()
        };

        assert_eq!(
            input.validate(),
            Err(ValidationError::MissingFields(vec![
                "title",
                "meta_description"
            ]))
        );
    }

    #[test]
    fn test_validate_rejects_long_meta_description() {
        let input = PostFields {
            meta_description: "é".repeat(161),
            ..fields()
        };

        assert_eq!(
            input.validate(),
            Err(ValidationError::TooLong {
                field: "meta_description",
                max: 160,
                actual: 161,
            })
        );
    }

    #[test]
    fn test_meta_description_limit_counts_characters() {
        let input = PostFields {
            meta_description: "é".repeat(160),
            ..fields()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_blank_image_url_is_dropped() {
        let input = PostFields {
            image_url: Some("   ".to_string()),
            ..fields()
        };
        assert_eq!(input.normalized_image_url(), None);
    }

    #[test]
    fn test_changes_keep_creation_time() {
        let created_at = Utc::now();
        let mut post = NewPostRecord {
            fields: fields(),
            slug: "herbal-teas".to_string(),
            created_at,
        }
        .into_post(Uuid::new_v4());

        let updated_at = created_at + chrono::TimeDelta::minutes(5);
        PostChanges {
            fields: PostFields {
                title: "Green Teas".to_string(),
                ..fields()
            },
            slug: "green-teas".to_string(),
            updated_at,
        }
        .apply_to(&mut post);

        assert_eq!(post.created_at, created_at);
        assert_eq!(post.updated_at, Some(updated_at));
        assert_eq!(post.slug, "green-teas");
    }
}
