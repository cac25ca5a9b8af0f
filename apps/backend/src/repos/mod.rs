//! Repository functions (generic over ConnectionTrait) returning domain models.

pub mod comments;
pub mod posts;
pub mod users;
pub mod votes;
