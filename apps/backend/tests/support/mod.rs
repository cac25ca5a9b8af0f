#![allow(dead_code)]

pub mod auth;

pub use postboard::test_support::{create_test_app, test_state};
