//! Request extractors. Thin adapters from HTTP onto `auth::guard` and the pager.

pub mod admin;
pub mod auth_token;
pub mod current_user;
pub mod page_params;

pub use admin::AdminClaims;
pub use auth_token::AuthToken;
pub use current_user::CurrentUser;
pub use page_params::PageParams;
