//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod comments_sea;
pub mod posts_sea;
pub mod users_sea;
pub mod votes_sea;
