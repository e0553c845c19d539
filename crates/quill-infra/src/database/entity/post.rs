//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{PostChanges, PostFields};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub meta_description: String,
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            image_url: model.image_url,
            meta_description: model.meta_description,
            slug: model.slug,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

impl ActiveModel {
    /// Writable columns shared by insert and update.
    fn with_fields(mut self, fields: &PostFields, slug: &str) -> Self {
        self.title = Set(fields.title.clone());
        self.content = Set(fields.content.clone());
        self.author = Set(fields.author.clone());
        self.image_url = Set(fields.normalized_image_url());
        self.meta_description = Set(fields.meta_description.clone());
        self.slug = Set(slug.to_string());
        self
    }

    /// A full row for a new post.
    pub fn for_insert(id: Uuid, record: &quill_core::domain::NewPostRecord) -> Self {
        Self {
            id: Set(id),
            created_at: Set(record.created_at.into()),
            updated_at: Set(None),
            ..Default::default()
        }
        .with_fields(&record.fields, &record.slug)
    }

    /// Only the columns an update touches; `id` and `created_at` stay unset.
    pub fn for_update(changes: &PostChanges) -> Self {
        Self {
            updated_at: Set(Some(changes.updated_at.into())),
            ..Default::default()
        }
        .with_fields(&changes.fields, &changes.slug)
    }
}
