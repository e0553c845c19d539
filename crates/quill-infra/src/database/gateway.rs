//! PostgreSQL post gateway.

use async_trait::async_trait;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, Order, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use quill_core::domain::{NewPostRecord, Post, PostChanges};
use quill_core::error::GatewayError;
use quill_core::ports::{PostGateway, SortKey};

use super::entity::post::{self, Entity as PostEntity};

/// Post gateway over a SeaORM connection.
pub struct SeaOrmPostGateway {
    db: DbConn,
}

impl SeaOrmPostGateway {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> GatewayError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => GatewayError::Connection(err.to_string()),
        _ => GatewayError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostGateway for SeaOrmPostGateway {
    async fn list_posts(&self, order_by: SortKey) -> Result<Vec<Post>, GatewayError> {
        let query = match order_by {
            SortKey::CreatedAt => PostEntity::find().order_by_desc(post::Column::CreatedAt),
            SortKey::UpdatedAt => PostEntity::find().order_by_with_nulls(
                post::Column::UpdatedAt,
                Order::Desc,
                NullOrdering::Last,
            ),
        };

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, GatewayError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_posts_by_slug(&self, slug: &str) -> Result<Vec<Post>, GatewayError> {
        tracing::debug!(slug = %slug, "Finding posts by slug");

        let rows = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_post(&self, record: &NewPostRecord) -> Result<Uuid, GatewayError> {
        let id = Uuid::new_v4();
        let row = post::ActiveModel::for_insert(id, record)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(row.id)
    }

    async fn update_post(&self, id: Uuid, changes: &PostChanges) -> Result<(), GatewayError> {
        let result = PostEntity::update_many()
            .set(post::ActiveModel::for_update(changes))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(GatewayError::NotFound);
        }
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), GatewayError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = %id, "Delete of absent post ignored");
        }
        Ok(())
    }
}
