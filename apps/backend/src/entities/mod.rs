pub mod comments;
pub mod posts;
pub mod users;
pub mod votes;

pub use comments::Entity as Comments;
pub use posts::Entity as Posts;
pub use users::Entity as Users;
pub use votes::Entity as Votes;
