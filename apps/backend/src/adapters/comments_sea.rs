//! SeaORM adapter for comment repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, Unchanged,
};

use crate::entities::comments;

pub async fn create_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    author_id: i64,
    content: String,
) -> Result<comments::Model, sea_orm::DbErr> {
    let comment_active = comments::ActiveModel {
        id: NotSet,
        content: Set(content),
        post_id: Set(post_id),
        author_id: Set(author_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    comment_active.insert(conn).await
}

pub async fn find_comment_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<Option<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find_by_id(comment_id).one(conn).await
}

pub async fn count_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    comments::Entity::find()
        .filter(comments::Column::PostId.eq(post_id))
        .count(conn)
        .await
}

/// Oldest first. `None` bounds return every comment on the post.
pub async fn list_comments_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<comments::Model>, sea_orm::DbErr> {
    comments::Entity::find()
        .filter(comments::Column::PostId.eq(post_id))
        .order_by_asc(comments::Column::CreatedAt)
        .order_by_asc(comments::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn update_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
    content: String,
) -> Result<comments::Model, sea_orm::DbErr> {
    let comment_active = comments::ActiveModel {
        id: Unchanged(comment_id),
        content: Set(content),
        ..Default::default()
    };

    comment_active.update(conn).await
}

pub async fn delete_comment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    comment_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = comments::Entity::delete_by_id(comment_id).exec(conn).await?;
    Ok(res.rows_affected)
}
