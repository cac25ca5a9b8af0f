//! SeaORM adapter for vote repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::entities::votes;

pub async fn find_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<Option<votes::Model>, sea_orm::DbErr> {
    votes::Entity::find()
        .filter(votes::Column::PostId.eq(post_id))
        .filter(votes::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn create_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<votes::Model, sea_orm::DbErr> {
    let vote_active = votes::ActiveModel {
        id: NotSet,
        post_id: Set(post_id),
        user_id: Set(user_id),
    };

    vote_active.insert(conn).await
}

pub async fn delete_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
    user_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = votes::Entity::delete_many()
        .filter(votes::Column::PostId.eq(post_id))
        .filter(votes::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn count_votes_for_post<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    post_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    votes::Entity::find()
        .filter(votes::Column::PostId.eq(post_id))
        .count(conn)
        .await
}
