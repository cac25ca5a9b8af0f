mod admin_users;
mod extractors;
mod login_flow;
