//! SeaORM adapter for post repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set, Unchanged,
};

use crate::entities::posts;

pub mod dto;

pub use dto::{PostCreate, PostUpdate};

pub async fn create_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostCreate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let post_active = posts::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        content: Set(dto.content),
        author_id: Set(dto.author_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    post_active.insert(conn).await
}

pub async fn find_post_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<Option<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find_by_id(post_id).one(conn).await
}

pub async fn count_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    posts::Entity::find().count(conn).await
}

/// Newest first; id breaks ties between posts created in the same instant.
pub async fn list_posts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    offset: u64,
    limit: u64,
) -> Result<Vec<posts::Model>, sea_orm::DbErr> {
    posts::Entity::find()
        .order_by_desc(posts::Column::CreatedAt)
        .order_by_desc(posts::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn update_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PostUpdate,
) -> Result<posts::Model, sea_orm::DbErr> {
    let post_active = posts::ActiveModel {
        id: Unchanged(dto.id),
        title: Set(dto.title),
        content: Set(dto.content),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    post_active.update(conn).await
}

pub async fn delete_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = posts::Entity::delete_by_id(post_id).exec(conn).await?;
    Ok(res.rows_affected)
}
